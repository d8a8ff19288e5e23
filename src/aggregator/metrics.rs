//! Summary statistics across all activities and daily stats.
//!
//! Averages divide by the total number of records, not by the number of
//! records that carry the field, so missing values pull the average toward
//! zero. Empty inputs give 0/0 and the resulting NaN is reported as is.

use crate::parser::records::{ActivityRecord, DailyStatRecord};
use crate::parser::schema::SummaryCard;
use crate::utils::config::{METERS_PER_KM, SECONDS_PER_HOUR};
use log::debug;

/// Raw summary statistics
///
/// **Public** - returned from calculate_summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Number of activities
    pub activity_count: usize,

    /// Total distance in kilometers
    pub total_distance_km: f64,

    /// Total duration in hours
    pub total_duration_hours: f64,

    /// Total calories, unrounded
    pub total_calories: f64,

    /// Average heart rate over all activities; NaN when there are none
    pub avg_heart_rate: f64,

    /// Average steps over all daily-stat records; NaN when there are none
    pub avg_daily_steps: f64,
}

/// Calculate summary statistics
///
/// **Public** - main entry point for the summary cards
///
/// # Arguments
/// * `activities` - Activity records
/// * `daily_stats` - Daily stat records
pub fn calculate_summary(
    activities: &[ActivityRecord],
    daily_stats: &[DailyStatRecord],
) -> SummaryStats {
    debug!(
        "Calculating summary over {} activities and {} daily stats",
        activities.len(),
        daily_stats.len()
    );

    let total_distance = sum_or_zero(activities.iter().map(|a| a.distance));
    let total_duration = sum_or_zero(activities.iter().map(|a| a.duration));
    let total_calories = sum_or_zero(activities.iter().map(|a| a.calories));
    let total_heart_rate = sum_or_zero(activities.iter().map(|a| a.avg_hr));
    let total_steps = sum_or_zero(daily_stats.iter().map(|d| d.steps));

    SummaryStats {
        activity_count: activities.len(),
        total_distance_km: total_distance / METERS_PER_KM,
        total_duration_hours: total_duration / SECONDS_PER_HOUR,
        total_calories,
        avg_heart_rate: total_heart_rate / activities.len() as f64,
        avg_daily_steps: total_steps / daily_stats.len() as f64,
    }
}

impl SummaryStats {
    /// Format for display: distance and duration to one decimal,
    /// everything else rounded to a whole number.
    ///
    /// **Public** - builds the dashboard summary card
    pub fn formatted(&self) -> SummaryCard {
        SummaryCard {
            total_activities: self.activity_count,
            total_distance: format!("{:.1}", self.total_distance_km),
            total_duration: format!("{:.1}", self.total_duration_hours),
            total_calories: format_whole(self.total_calories),
            avg_heart_rate: format_whole(self.avg_heart_rate),
            avg_steps: format_whole(self.avg_daily_steps),
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Activities: {} | Distance: {:.1} km | Duration: {:.1} h | Calories: {:.0} | Avg HR: {:.0} | Avg steps: {:.0}",
            self.activity_count,
            self.total_distance_km,
            self.total_duration_hours,
            self.total_calories,
            self.avg_heart_rate,
            self.avg_daily_steps
        )
    }
}

/// Sum with missing values as zero, starting from +0.0
///
/// `Iterator::sum` over no items yields -0.0, which would print as "-0.0".
fn sum_or_zero(values: impl Iterator<Item = Option<f64>>) -> f64 {
    values.fold(0.0, |acc, v| acc + v.unwrap_or(0.0))
}

/// Round half away from zero, then print without decimals
fn format_whole(value: f64) -> String {
    format!("{:.0}", value.round())
}
