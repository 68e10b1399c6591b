//! Memorization item model.
//!
//! A [`MemorizationItem`] is a range of units (ayahs) inside one section
//! (surah) that the user is tracking. Items are created as [`ItemStatus::New`]
//! and only change through [`MemorizationItem::apply_review`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::section::{validate_new_range, Section};

/// Stable item identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse mastery classification.
///
/// Drives both display grouping and interval halving:
///
///   New ──(3 reviews)──> Weak ──(10 reviews)──> Mastered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Freshly added, fewer than three reviews
    #[default]
    New,
    /// Reviewed a few times but not yet solid
    Weak,
    /// Reviewed ten times or more
    Mastered,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::New => "new",
            ItemStatus::Weak => "weak",
            ItemStatus::Mastered => "mastered",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded text range tracked for memorization and review.
///
/// Field names serialize in camelCase. Backups written by the browser
/// version of the app used `surah`/`ayah` names; those are accepted as
/// aliases on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorizationItem {
    pub id: ItemId,
    #[serde(alias = "surahId")]
    pub section_id: u32,
    #[serde(alias = "surahName")]
    pub section_name: String,
    #[serde(alias = "fromAyah")]
    pub from_unit: u32,
    #[serde(alias = "toAyah")]
    pub to_unit: u32,
    #[serde(default)]
    pub status: ItemStatus,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(default)]
    pub review_count: u32,
}

impl MemorizationItem {
    /// Create a new, never-reviewed item after validating the unit range.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidRange`] if the range is malformed or
    /// does not fit inside `section`.
    pub fn create(
        id: ItemId,
        section: &Section,
        from_unit: u32,
        to_unit: u32,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        validate_new_range(section, from_unit, to_unit)?;
        Ok(Self {
            id,
            section_id: section.id,
            section_name: section.name.to_string(),
            from_unit,
            to_unit,
            status: ItemStatus::New,
            date_added: today,
            last_reviewed: None,
            review_count: 0,
        })
    }

    /// Number of units covered by the range (inclusive on both ends).
    pub fn unit_count(&self) -> u32 {
        self.to_unit.saturating_sub(self.from_unit) + 1
    }
}

/// Whole calendar days from `earlier` to `later`. Negative when `later`
/// precedes `earlier`.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}
