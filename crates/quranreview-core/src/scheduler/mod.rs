//! Review scheduler.
//!
//! Decides whether a single item is due on a given day and splits a whole
//! collection into the three buckets shown on the daily review page:
//! - previously mastered items that are not due yet
//! - every item due today, whatever its status
//! - new items added today
//!
//! The scheduler keeps no state between calls. Buckets are re-derived from
//! the collection on every call and keep the collection's order.

mod interval;

pub use interval::{effective_required_days, halve_for_weak, required_days};

use chrono::NaiveDate;
use serde::Serialize;

use crate::item::{days_between, ItemStatus, MemorizationItem};

/// Whether `item` needs a review on `today`.
///
/// Items that were never reviewed are always due. Otherwise the item is due
/// once the whole days since its last review reach its required interval.
pub fn is_due_today(item: &MemorizationItem, today: NaiveDate) -> bool {
    match item.last_reviewed {
        None => true,
        Some(last) => days_between(last, today) >= i64::from(effective_required_days(item)),
    }
}

/// One of the three display buckets.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    PreviouslyMastered,
    DueToday,
    NewlyAdded,
}

impl Bucket {
    /// Buckets in the order the review page lists them.
    pub const DISPLAY_ORDER: [Bucket; 3] = [
        Bucket::PreviouslyMastered,
        Bucket::DueToday,
        Bucket::NewlyAdded,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::PreviouslyMastered => "Previously memorized (for reinforcement)",
            Bucket::DueToday => "Today's review",
            Bucket::NewlyAdded => "New memorization",
        }
    }
}

/// The collection split into display buckets for one day.
///
/// Membership is computed per bucket. An item can sit in both `due_today`
/// and `newly_added`; it is then listed in both.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodayPartition<'a> {
    pub previously_mastered: Vec<&'a MemorizationItem>,
    pub due_today: Vec<&'a MemorizationItem>,
    pub newly_added: Vec<&'a MemorizationItem>,
}

impl<'a> TodayPartition<'a> {
    pub fn bucket(&self, bucket: Bucket) -> &[&'a MemorizationItem] {
        match bucket {
            Bucket::PreviouslyMastered => &self.previously_mastered,
            Bucket::DueToday => &self.due_today,
            Bucket::NewlyAdded => &self.newly_added,
        }
    }

    /// True when there is nothing to show for the day.
    pub fn is_empty(&self) -> bool {
        self.previously_mastered.is_empty()
            && self.due_today.is_empty()
            && self.newly_added.is_empty()
    }

    /// Every row in display order, tagged with its bucket. Items that belong
    /// to two buckets appear twice.
    pub fn display_order(&self) -> impl Iterator<Item = (Bucket, &'a MemorizationItem)> + '_ {
        Bucket::DISPLAY_ORDER
            .into_iter()
            .flat_map(move |b| self.bucket(b).iter().map(move |item| (b, *item)))
    }
}

/// Split `items` into the three display buckets for `today`.
pub fn partition_for_today(items: &[MemorizationItem], today: NaiveDate) -> TodayPartition<'_> {
    let previously_mastered = items
        .iter()
        .filter(|item| item.status == ItemStatus::Mastered && !is_due_today(item, today))
        .collect();

    let due_today = items
        .iter()
        .filter(|item| is_due_today(item, today))
        .collect();

    let newly_added = items
        .iter()
        .filter(|item| item.status == ItemStatus::New && item.date_added == today)
        .collect();

    TodayPartition {
        previously_mastered,
        due_today,
        newly_added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_item(
        id: u64,
        status: ItemStatus,
        review_count: u32,
        last_reviewed: Option<&str>,
        date_added: &str,
    ) -> MemorizationItem {
        MemorizationItem {
            id: ItemId(id),
            section_id: 1,
            section_name: "الفاتحة".to_string(),
            from_unit: 1,
            to_unit: 7,
            status,
            date_added: date(date_added),
            last_reviewed: last_reviewed.map(date),
            review_count,
        }
    }

    #[test]
    fn never_reviewed_is_due() {
        let item = make_item(1, ItemStatus::New, 0, None, "2024-02-01");
        assert!(is_due_today(&item, date("2024-02-10")));
    }

    #[test]
    fn due_once_interval_has_elapsed() {
        let item = make_item(1, ItemStatus::New, 2, Some("2024-02-01"), "2024-01-20");
        assert!(!is_due_today(&item, date("2024-02-04")));
        assert!(is_due_today(&item, date("2024-02-05")));
    }

    #[test]
    fn weak_items_use_halved_interval() {
        let item = make_item(1, ItemStatus::Weak, 3, Some("2024-02-01"), "2024-01-20");
        assert_eq!(effective_required_days(&item), 3);
        assert!(!is_due_today(&item, date("2024-02-03")));
        assert!(is_due_today(&item, date("2024-02-04")));
    }

    #[test]
    fn review_dated_in_future_is_not_due() {
        let item = make_item(1, ItemStatus::New, 0, Some("2024-02-10"), "2024-02-01");
        assert!(!is_due_today(&item, date("2024-02-05")));
    }

    #[test]
    fn partition_buckets_and_order() {
        let today = date("2024-02-10");
        let items = vec![
            // mastered, reviewed yesterday: not due
            make_item(1, ItemStatus::Mastered, 15, Some("2024-02-09"), "2024-01-01"),
            // weak, 8 reviews -> 15 days; 9 days since: not due, not shown
            make_item(2, ItemStatus::Weak, 8, Some("2024-02-01"), "2024-01-15"),
            // new today: due and newly added
            make_item(3, ItemStatus::New, 0, None, "2024-02-10"),
            // mastered, long ago: due
            make_item(4, ItemStatus::Mastered, 13, Some("2023-12-01"), "2023-06-01"),
            // new from an earlier day, never reviewed: due only
            make_item(5, ItemStatus::New, 0, None, "2024-02-08"),
        ];

        let p = partition_for_today(&items, today);
        let ids = |v: &[&MemorizationItem]| v.iter().map(|i| i.id.0).collect::<Vec<_>>();

        assert_eq!(ids(&p.previously_mastered), vec![1]);
        assert_eq!(ids(&p.due_today), vec![3, 4, 5]);
        assert_eq!(ids(&p.newly_added), vec![3]);
        assert!(!p.is_empty());
    }

    #[test]
    fn display_order_lists_shared_items_twice() {
        let today = date("2024-02-10");
        let items = vec![make_item(3, ItemStatus::New, 0, None, "2024-02-10")];
        let p = partition_for_today(&items, today);
        let rows: Vec<_> = p.display_order().map(|(b, i)| (b, i.id.0)).collect();
        assert_eq!(
            rows,
            vec![(Bucket::DueToday, 3), (Bucket::NewlyAdded, 3)]
        );
    }

    #[test]
    fn empty_collection_is_empty_partition() {
        let p = partition_for_today(&[], date("2024-02-10"));
        assert!(p.is_empty());
        assert_eq!(p.display_order().count(), 0);
    }
}
