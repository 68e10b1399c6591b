//! Backup export/import and data reset.

use chrono::Utc;
use clap::Subcommand;
use quranreview_core::{Backup, ItemRepository, Settings};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum DataAction {
    /// Write settings and items to a JSON backup
    Export {
        /// Output file (default: quranreview-backup-<date>.json)
        output: Option<PathBuf>,
    },
    /// Replace settings and items with a JSON backup
    Import {
        /// Backup file to read
        file: PathBuf,
    },
    /// Reset items to the sample collection and settings to defaults
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ItemRepository::open()?;

    match action {
        DataAction::Export { output } => {
            let now = Utc::now();
            let path = output.unwrap_or_else(|| PathBuf::from(Backup::file_name(now)));
            let backup = Backup::new(Settings::load()?, repo.load()?, now);
            backup.write_to(&path)?;
            println!("Exported {} items to {}", backup.memorization_data.len(), path.display());
        }
        DataAction::Import { file } => {
            let backup = Backup::read_from(&file)?;
            backup.restore(&repo)?;
            println!("Imported {} items from {}", backup.memorization_data.len(), file.display());
        }
        DataAction::Clear { yes } => {
            if !yes {
                return Err("refusing to clear data without --yes".into());
            }
            repo.clear()?;
            Settings::default().save()?;
            println!("all data cleared");
        }
    }
    Ok(())
}
