use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::item::MemorizationItem;

/// Review activity on a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayActivity {
    pub date: NaiveDate,
    /// Items whose most recent review fell on `date`
    pub count: usize,
    /// `count` relative to the daily goal, capped at 100
    pub percentage: f64,
}

/// Activity for the `days` days ending on `today`, oldest first.
///
/// Only the most recent review of each item is known, so an item reviewed
/// on several of these days counts once, on the last of them. A zero goal
/// is treated as a goal of one.
pub fn recent_activity(
    items: &[MemorizationItem],
    today: NaiveDate,
    days: u32,
    daily_goal: u32,
) -> Vec<DayActivity> {
    let goal = f64::from(daily_goal.max(1));

    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(i64::from(offset));
            let count = items
                .iter()
                .filter(|item| item.last_reviewed == Some(date))
                .count();
            DayActivity {
                date,
                count,
                percentage: (count as f64 / goal * 100.0).min(100.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, ItemStatus};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn reviewed_on(id: u64, day: Option<&str>) -> MemorizationItem {
        MemorizationItem {
            id: ItemId(id),
            section_id: 1,
            section_name: "الفاتحة".to_string(),
            from_unit: 1,
            to_unit: 7,
            status: ItemStatus::New,
            date_added: date("2024-01-01"),
            last_reviewed: day.map(date),
            review_count: 1,
        }
    }

    #[test]
    fn seven_days_oldest_first() {
        let week = recent_activity(&[], date("2024-02-10"), 7, 5);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date("2024-02-04"));
        assert_eq!(week[6].date, date("2024-02-10"));
        assert!(week.iter().all(|d| d.count == 0 && d.percentage == 0.0));
    }

    #[test]
    fn counts_and_caps_percentage() {
        let mut items: Vec<_> = (0..6).map(|i| reviewed_on(i, Some("2024-02-10"))).collect();
        items.push(reviewed_on(10, Some("2024-02-09")));
        items.push(reviewed_on(11, None));
        items.push(reviewed_on(12, Some("2024-01-01")));

        let week = recent_activity(&items, date("2024-02-10"), 7, 5);
        let today = &week[6];
        assert_eq!(today.count, 6);
        assert_eq!(today.percentage, 100.0);
        let yesterday = &week[5];
        assert_eq!(yesterday.count, 1);
        assert!((yesterday.percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_goal_does_not_divide_by_zero() {
        let items = vec![reviewed_on(1, Some("2024-02-10"))];
        let week = recent_activity(&items, date("2024-02-10"), 1, 0);
        assert_eq!(week[0].percentage, 100.0);
    }
}
