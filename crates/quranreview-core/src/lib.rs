//! # QuranReview Core Library
//!
//! This library provides the core logic for QuranReview, a tracker for
//! memorized text ranges and their review schedule. All operations are
//! available through the standalone CLI binary, which is a thin layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Scheduler**: pure functions deciding which items are due on a given
//!   day and splitting the collection into display buckets
//! - **Review**: the status transition applied when a review is recorded
//! - **Sections**: static reference table and range validation
//! - **Storage**: SQLite key-value store, TOML settings, JSON backups
//!
//! ## Key Components
//!
//! - [`is_due_today`] / [`partition_for_today`]: the review scheduler
//! - [`record_review`]: the status transitioner
//! - [`validate_new_range`]: the creation validator
//! - [`ItemRepository`]: item persistence
//! - [`Settings`]: user settings

pub mod error;
pub mod item;
pub mod review;
pub mod scheduler;
pub mod section;
pub mod stats;
pub mod storage;

pub use error::{BackupError, ConfigError, CoreError, DatabaseError, ValidationError};
pub use item::{days_between, ItemId, ItemStatus, MemorizationItem};
pub use review::{record_review, status_after, MASTERED_THRESHOLD, WEAK_THRESHOLD};
pub use scheduler::{
    effective_required_days, is_due_today, partition_for_today, required_days, Bucket,
    TodayPartition,
};
pub use section::{find_section, validate_new_range, RevelationKind, Section, SECTIONS};
pub use stats::{recent_activity, CollectionStats, DayActivity};
pub use storage::{Backup, Database, ItemRepository, Settings, Theme};
