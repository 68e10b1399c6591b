use chrono::NaiveDate;
use clap::Subcommand;
use quranreview_core::{recent_activity, CollectionStats, ItemRepository, Settings};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Counts by status and average reviews
    Summary,
    /// Reviews over the last seven days
    Week {
        /// Last day of the week (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let repo = ItemRepository::open()?;
    let items = repo.load()?;

    match action {
        StatsAction::Summary => {
            let stats = CollectionStats::from_items(&items);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Week { date } => {
            let settings = Settings::load_or_default();
            let week = recent_activity(&items, super::resolve_today(date), 7, settings.daily_goal);
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
    }
    Ok(())
}
