//! Per-day and per-type activity rollups.
//!
//! Daily rollups are keyed by the date portion of `start_time` and come out
//! in calendar order. Type rollups keep the order in which each type was
//! first seen.

use crate::parser::records::ActivityRecord;
use crate::parser::schema::{ActivityTypeShare, DailyActivity};
use crate::utils::config::{METERS_PER_KM, SECONDS_PER_HOUR, UNKNOWN_ACTIVITY_TYPE};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

/// Date layouts tried when ordering daily keys
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Map keyed by string that remembers first-insertion order
///
/// **Private** - backing store for build_type_distribution
#[derive(Debug)]
struct InsertionOrdered<V> {
    index: HashMap<String, usize>,
    entries: Vec<V>,
}

impl<V> InsertionOrdered<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Existing entry for `key`, or a new one appended at the end
    fn entry_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let existing = self.index.get(key).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(make());
                self.index.insert(key.to_string(), slot);
                slot
            }
        };
        &mut self.entries[slot]
    }

    fn into_values(self) -> Vec<V> {
        self.entries
    }
}

/// Build the per-day activity rollup
///
/// **Public** - main entry point for the daily chart
///
/// # Algorithm
/// 1. Skip activities without a start timestamp
/// 2. Key each activity by the date portion of the timestamp
/// 3. Accumulate count, km, hours and calories per key
/// 4. Sort keys by calendar date
pub fn build_daily_rollup(activities: &[ActivityRecord]) -> Vec<DailyActivity> {
    debug!("Building daily rollup from {} activities", activities.len());

    let mut by_date: HashMap<&str, DailyActivity> = HashMap::new();
    let mut skipped = 0usize;

    for activity in activities {
        let Some(date) = activity.start_date() else {
            skipped += 1;
            continue;
        };

        let day = by_date.entry(date).or_insert_with(|| DailyActivity {
            date: date.to_string(),
            count: 0,
            distance_km: 0.0,
            duration_hours: 0.0,
            calories: 0.0,
        });

        day.count += 1;
        day.distance_km += activity.distance.unwrap_or(0.0) / METERS_PER_KM;
        day.duration_hours += activity.duration.unwrap_or(0.0) / SECONDS_PER_HOUR;
        day.calories += activity.calories.unwrap_or(0.0);
    }

    let mut days: Vec<DailyActivity> = by_date.into_values().collect();
    days.sort_by(|a, b| {
        date_sort_key(&a.date)
            .cmp(&date_sort_key(&b.date))
            .then_with(|| a.date.cmp(&b.date))
    });

    debug!(
        "Built {} daily rollups ({} activities without start time)",
        days.len(),
        skipped
    );

    days
}

/// Build the per-type activity distribution
///
/// **Public** - main entry point for the type chart
///
/// Activities without a type are grouped under `"unknown"`.
pub fn build_type_distribution(activities: &[ActivityRecord]) -> Vec<ActivityTypeShare> {
    let mut by_type: InsertionOrdered<ActivityTypeShare> = InsertionOrdered::new();

    for activity in activities {
        let activity_type = activity
            .activity_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_ACTIVITY_TYPE);

        let share = by_type.entry_or_insert_with(activity_type, || ActivityTypeShare {
            activity_type: activity_type.to_string(),
            count: 0,
            distance_km: 0.0,
        });

        share.count += 1;
        share.distance_km += activity.distance.unwrap_or(0.0) / METERS_PER_KM;
    }

    let shares = by_type.into_values();
    debug!("Built distribution over {} activity types", shares.len());
    shares
}

/// Parse a daily key into a calendar date
///
/// Returns `None` for keys in none of the known layouts.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(key, fmt).ok())
}

/// Parsed dates first in calendar order, unparseable keys after them
fn date_sort_key(key: &str) -> (bool, Option<NaiveDate>) {
    let parsed = parse_date_key(key);
    (parsed.is_none(), parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(
        start_time: Option<&str>,
        activity_type: Option<&str>,
        distance: f64,
    ) -> ActivityRecord {
        ActivityRecord {
            activity_id: Some("1".to_string()),
            start_time: start_time.map(str::to_string),
            activity_type: activity_type.map(str::to_string),
            distance: Some(distance),
            ..Default::default()
        }
    }

    #[test]
    fn test_insertion_ordered_reuses_slot() {
        let mut map: InsertionOrdered<u32> = InsertionOrdered::new();
        *map.entry_or_insert_with("b", || 0) += 1;
        *map.entry_or_insert_with("a", || 0) += 1;
        *map.entry_or_insert_with("b", || 0) += 1;

        assert_eq!(map.into_values(), vec![2, 1]);
    }

    #[test]
    fn test_daily_rollup_sorted() {
        let activities = vec![
            activity(Some("2024-03-02 08:00:00"), None, 1000.0),
            activity(Some("2024-03-01 08:00:00"), None, 2000.0),
        ];

        let days = build_daily_rollup(&activities);
        assert_eq!(days[0].date, "2024-03-01");
        assert_eq!(days[1].date, "2024-03-02");
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let activities = vec![
            activity(Some("someday 08:00"), None, 0.0),
            activity(Some("2024-03-01 08:00:00"), None, 0.0),
        ];

        let days = build_daily_rollup(&activities);
        assert_eq!(days[0].date, "2024-03-01");
        assert_eq!(days[1].date, "someday");
    }

    #[test]
    fn test_parse_date_key_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date_key("2024-03-01"), expected);
        assert_eq!(parse_date_key("2024/03/01"), expected);
        assert_eq!(parse_date_key("03/01/2024"), expected);
        assert_eq!(parse_date_key("yesterday"), None);
    }

    #[test]
    fn test_empty_type_is_unknown() {
        let activities = vec![activity(None, Some(""), 500.0)];
        let shares = build_type_distribution(&activities);
        assert_eq!(shares[0].activity_type, "unknown");
        assert_eq!(shares[0].distance_km, 0.5);
    }
}
