//! Graduated review interval table.

use crate::item::{ItemStatus, MemorizationItem};

/// Days that must elapse after a review before the item is due again,
/// indexed by how many reviews it has had.
///
/// | reviews | days |
/// |---------|------|
/// | 0       | 1    |
/// | 1       | 2    |
/// | 2       | 4    |
/// | 3       | 7    |
/// | 4       | 14   |
/// | 5-7     | 21   |
/// | 8-12    | 30   |
/// | 13+     | 45   |
pub fn required_days(review_count: u32) -> u32 {
    match review_count {
        0 => 1,
        1 => 2,
        2 => 4,
        3 => 7,
        4 => 14,
        5..=7 => 21,
        8..=12 => 30,
        _ => 45,
    }
}

/// Halve an interval for weak items, never going below one day.
pub fn halve_for_weak(days: u32) -> u32 {
    (days / 2).max(1)
}

/// Interval for this particular item, taking its status into account.
pub fn effective_required_days(item: &MemorizationItem) -> u32 {
    let base = required_days(item.review_count);
    match item.status {
        ItemStatus::Weak => halve_for_weak(base),
        ItemStatus::New | ItemStatus::Mastered => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_steps() {
        let expected = [
            (0, 1),
            (1, 2),
            (2, 4),
            (3, 7),
            (4, 14),
            (5, 21),
            (7, 21),
            (8, 30),
            (12, 30),
            (13, 45),
            (100, 45),
        ];
        for (count, days) in expected {
            assert_eq!(required_days(count), days, "review_count={count}");
        }
    }

    #[test]
    fn weak_halving_floors_at_one() {
        assert_eq!(halve_for_weak(1), 1);
        assert_eq!(halve_for_weak(2), 1);
        assert_eq!(halve_for_weak(7), 3);
        assert_eq!(halve_for_weak(21), 10);
        assert_eq!(halve_for_weak(45), 22);
    }
}
