pub mod config;
pub mod data;
pub mod item;
pub mod section;
pub mod stats;
pub mod today;

use chrono::{Local, NaiveDate};

/// The `--date` override, or the local calendar date.
pub fn resolve_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
