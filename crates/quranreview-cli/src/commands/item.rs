//! Memorization item commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use quranreview_core::{ItemId, ItemRepository};

#[derive(Subcommand)]
pub enum ItemAction {
    /// Add a new memorized range
    Add {
        /// Section ID (see `section list`)
        section_id: u32,
        /// First unit of the range
        from: u32,
        /// Last unit of the range (inclusive)
        to: u32,
        /// Date added (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all items
    List,
    /// Get item details
    Get {
        /// Item ID
        id: u64,
    },
    /// Record a completed review
    Review {
        /// Item ID
        id: u64,
        /// Review date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete an item
    Delete {
        /// Item ID
        id: u64,
    },
}

pub fn run(action: ItemAction) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ItemRepository::open()?;

    match action {
        ItemAction::Add {
            section_id,
            from,
            to,
            date,
        } => {
            let item = repo.add(section_id, from, to, super::resolve_today(date))?;
            println!("Item added: {}", item.id);
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        ItemAction::List => {
            let items = repo.load()?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        ItemAction::Get { id } => {
            let item = repo.get(ItemId(id))?;
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        ItemAction::Review { id, date } => {
            let item = repo.record_review(ItemId(id), super::resolve_today(date))?;
            println!("Review recorded:");
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        ItemAction::Delete { id } => {
            repo.delete(ItemId(id))?;
            println!("Item deleted: {id}");
        }
    }
    Ok(())
}
