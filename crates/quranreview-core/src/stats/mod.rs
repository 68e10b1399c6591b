//! Statistics module for QuranReview
//!
//! Collection-level summaries (counts per status, average reviews) and the
//! recent review activity shown as a weekly chart.

mod activity;
mod summary;

pub use activity::{recent_activity, DayActivity};
pub use summary::CollectionStats;
