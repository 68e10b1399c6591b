//! Property tests for the review scheduler and status transitions.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use quranreview_core::{
    effective_required_days, is_due_today, partition_for_today, record_review, required_days,
    ItemId, ItemStatus, MemorizationItem,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_status() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::New),
        Just(ItemStatus::Weak),
        Just(ItemStatus::Mastered),
    ]
}

prop_compose! {
    fn arb_item(id: u64)(
        status in arb_status(),
        review_count in 0u32..60,
        added_offset in 0i64..400,
        reviewed_offset in proptest::option::of(0i64..400),
    ) -> MemorizationItem {
        MemorizationItem {
            id: ItemId(id),
            section_id: 2,
            section_name: "البقرة".to_string(),
            from_unit: 1,
            to_unit: 10,
            status,
            date_added: base_date() + Duration::days(added_offset),
            last_reviewed: reviewed_offset.map(|d| base_date() + Duration::days(d)),
            review_count,
        }
    }
}

fn arb_collection() -> impl Strategy<Value = Vec<MemorizationItem>> {
    (0usize..20).prop_flat_map(|n| {
        (0..n)
            .map(|i| arb_item(i as u64))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn never_reviewed_is_always_due(
        mut item in arb_item(1),
        today_offset in 0i64..800,
    ) {
        item.last_reviewed = None;
        prop_assert!(is_due_today(&item, base_date() + Duration::days(today_offset)));
    }

    #[test]
    fn interval_table_is_monotone(count in 0u32..44) {
        prop_assert!(required_days(count) <= required_days(count + 1));
    }

    #[test]
    fn weak_items_are_due_no_later_than_others(
        mut item in arb_item(1),
        today_offset in 0i64..800,
    ) {
        let today = base_date() + Duration::days(today_offset);
        item.status = ItemStatus::New;
        let due_as_new = is_due_today(&item, today);
        item.status = ItemStatus::Weak;
        prop_assert!(!due_as_new || is_due_today(&item, today));
    }

    #[test]
    fn weak_interval_is_halved(mut item in arb_item(1)) {
        let base = required_days(item.review_count);
        item.status = ItemStatus::Weak;
        prop_assert_eq!(effective_required_days(&item), std::cmp::max(1, base / 2));
    }

    #[test]
    fn mastered_and_new_buckets_never_overlap(
        items in arb_collection(),
        today_offset in 0i64..800,
    ) {
        let today = base_date() + Duration::days(today_offset);
        let p = partition_for_today(&items, today);
        for m in &p.previously_mastered {
            prop_assert!(!p.newly_added.iter().any(|n| n.id == m.id));
        }
    }

    #[test]
    fn due_bucket_matches_predicate_in_source_order(
        items in arb_collection(),
        today_offset in 0i64..800,
    ) {
        let today = base_date() + Duration::days(today_offset);
        let p = partition_for_today(&items, today);
        let expected: Vec<ItemId> = items
            .iter()
            .filter(|i| is_due_today(i, today))
            .map(|i| i.id)
            .collect();
        let actual: Vec<ItemId> = p.due_today.iter().map(|i| i.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn review_never_lowers_count(item in arb_item(1), day in 0i64..800) {
        let today = base_date() + Duration::days(day);
        let updated = record_review(&item, today);
        prop_assert_eq!(updated.review_count, item.review_count + 1);
        prop_assert_eq!(updated.last_reviewed, Some(today));
        prop_assert_eq!(updated.id, item.id);
        prop_assert_eq!(updated.date_added, item.date_added);
    }

    #[test]
    fn mastered_is_sticky_above_threshold(
        mut item in arb_item(1),
        extra in 0u32..30,
        reviews in 1usize..10,
    ) {
        item.review_count = 10 + extra;
        item.status = ItemStatus::Mastered;
        let today = base_date();
        for _ in 0..reviews {
            item = record_review(&item, today);
            prop_assert_eq!(item.status, ItemStatus::Mastered);
        }
        prop_assert_eq!(item.review_count, 10 + extra + reviews as u32);
    }

    #[test]
    fn reviewed_item_is_not_due_the_same_day(item in arb_item(1), day in 0i64..800) {
        let today = base_date() + Duration::days(day);
        let updated = record_review(&item, today);
        prop_assert!(!is_due_today(&updated, today));
    }
}
