//! Status transitions driven by completed reviews.

use chrono::NaiveDate;

use crate::item::{ItemStatus, MemorizationItem};

/// Review count at which an item becomes [`ItemStatus::Weak`].
pub const WEAK_THRESHOLD: u32 = 3;
/// Review count at which an item becomes [`ItemStatus::Mastered`].
pub const MASTERED_THRESHOLD: u32 = 10;

/// Status an item should have after `review_count` reviews, starting from
/// `current`. Below [`WEAK_THRESHOLD`] the status is left as it was.
pub fn status_after(current: ItemStatus, review_count: u32) -> ItemStatus {
    if review_count >= MASTERED_THRESHOLD {
        ItemStatus::Mastered
    } else if review_count >= WEAK_THRESHOLD {
        ItemStatus::Weak
    } else {
        current
    }
}

impl MemorizationItem {
    /// Record one completed review on `today`.
    pub fn apply_review(&mut self, today: NaiveDate) {
        self.last_reviewed = Some(today);
        self.review_count = self.review_count.saturating_add(1);
        self.status = status_after(self.status, self.review_count);
    }
}

/// Return a copy of `item` with one more review recorded on `today`.
pub fn record_review(item: &MemorizationItem, today: NaiveDate) -> MemorizationItem {
    let mut updated = item.clone();
    updated.apply_review(today);
    updated
}
