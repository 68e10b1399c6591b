use serde::{Deserialize, Serialize};

use crate::item::{ItemStatus, MemorizationItem};

/// Counts per status plus the mean review count.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CollectionStats {
    pub total: usize,
    pub mastered: usize,
    pub weak: usize,
    pub new: usize,
    pub total_reviews: u64,
    pub average_reviews: f64,
}

impl CollectionStats {
    pub fn from_items(items: &[MemorizationItem]) -> Self {
        let mut stats = CollectionStats {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            match item.status {
                ItemStatus::Mastered => stats.mastered += 1,
                ItemStatus::Weak => stats.weak += 1,
                ItemStatus::New => stats.new += 1,
            }
            stats.total_reviews += u64::from(item.review_count);
        }

        if stats.total > 0 {
            stats.average_reviews = stats.total_reviews as f64 / stats.total as f64;
        }
        stats
    }
}
