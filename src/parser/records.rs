//! Input record types, one per CSV file.
//!
//! Field names match the CSV headers exactly. Every numeric field is
//! optional: empty cells, cells that do not parse as numbers, and
//! non-finite values (`NaN`, `inf`) all deserialize to `None`.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of `activities.csv`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ActivityRecord {
    /// Activity identifier; rows without one never reach the aggregator
    #[serde(default)]
    pub activity_id: Option<String>,

    /// Start timestamp, "date time" (e.g. "2024-03-01 07:15:00")
    #[serde(default)]
    pub start_time: Option<String>,

    /// Type label (e.g. "running")
    #[serde(default)]
    pub activity_type: Option<String>,

    #[serde(default, alias = "activity_name")]
    pub name: Option<String>,

    /// Distance in meters
    #[serde(default, deserialize_with = "finite_option")]
    pub distance: Option<f64>,

    /// Duration in seconds
    #[serde(default, deserialize_with = "finite_option")]
    pub duration: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub calories: Option<f64>,

    /// Average heart rate in bpm
    #[serde(default, deserialize_with = "finite_option")]
    pub avg_hr: Option<f64>,
}

impl ActivityRecord {
    /// Date portion of `start_time`: everything before the first space.
    ///
    /// Returns `None` when the timestamp is absent or empty.
    pub fn start_date(&self) -> Option<&str> {
        let start_time = self.start_time.as_deref()?;
        if start_time.is_empty() {
            return None;
        }
        start_time.split(' ').next()
    }
}

/// One row of `daily_stats.csv`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DailyStatRecord {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "finite_option")]
    pub steps: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub resting_hr: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub min_hr: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub max_hr: Option<f64>,
}

/// One row of `sleep.csv`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SleepRecord {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "finite_option")]
    pub total_sleep_seconds: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub deep_sleep_seconds: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub light_sleep_seconds: Option<f64>,

    #[serde(default, deserialize_with = "finite_option")]
    pub rem_sleep_seconds: Option<f64>,

    /// Sleep score, nominally 0-100 but never range checked
    #[serde(default, deserialize_with = "finite_option")]
    pub sleep_score: Option<f64>,
}

/// `csv::invalid_option` that also maps NaN and infinities to `None`
fn finite_option<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = csv::invalid_option(de)?;
    Ok(value.filter(|v| v.is_finite()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_date_splits_on_first_space() {
        let record = ActivityRecord {
            start_time: Some("2024-03-01 07:15:00 UTC".to_string()),
            ..Default::default()
        };
        assert_eq!(record.start_date(), Some("2024-03-01"));
    }

    #[test]
    fn test_start_date_without_time() {
        let record = ActivityRecord {
            start_time: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(record.start_date(), Some("2024-03-01"));
    }

    #[test]
    fn test_start_date_missing_or_empty() {
        let mut record = ActivityRecord::default();
        assert_eq!(record.start_date(), None);

        record.start_time = Some(String::new());
        assert_eq!(record.start_date(), None);
    }
}
