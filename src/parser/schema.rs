//! Output JSON schema definitions for dashboard data.
//!
//! This module defines the structure of the dashboard document we write
//! to disk. Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};

/// Top-level dashboard document written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the dashboard was generated
    pub generated_at: String,

    /// Number of input records per source
    pub record_counts: RecordCounts,

    /// Summary cards
    pub summary: SummaryCard,

    /// Per-day activity rollup, chronological
    pub daily_activity: Vec<DailyActivity>,

    /// Per-type activity distribution, first-seen order
    pub activity_types: Vec<ActivityTypeShare>,

    /// Daily heart rate, input order
    pub heart_rate: Vec<HeartRatePoint>,

    /// Nightly sleep breakdown, input order
    pub sleep: Vec<SleepPoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub activities: usize,
    pub daily_stats: usize,
    pub sleep: usize,
}

/// Summary statistics formatted for display
///
/// Values are display strings; a non-finite average shows as `"NaN"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub total_activities: usize,
    pub total_distance: String,
    pub total_duration: String,
    pub total_calories: String,
    pub avg_heart_rate: String,
    pub avg_steps: String,
}

/// Activities rolled up for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: String,
    pub count: u32,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub calories: f64,
}

/// Occurrences and distance for one activity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTypeShare {
    pub activity_type: String,
    pub count: u32,
    pub distance_km: f64,
}

/// One day of heart rate data with a known resting rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRatePoint {
    pub date: String,
    pub resting: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One night of sleep; hours are one-decimal display strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepPoint {
    pub date: String,
    pub total_hours: String,
    pub deep_hours: String,
    pub light_hours: String,
    pub rem_hours: String,
    pub score: Option<f64>,
}
