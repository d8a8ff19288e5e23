//! Chart series for heart rate and sleep.
//!
//! Both keep input order. Daily stats are expected to arrive sorted by date.

use crate::parser::records::{DailyStatRecord, SleepRecord};
use crate::parser::schema::{HeartRatePoint, SleepPoint};
use crate::utils::config::SECONDS_PER_HOUR;
use log::debug;

/// Build the daily heart rate series
///
/// **Public** - main entry point for the heart rate chart
///
/// Days without a resting heart rate (absent, zero or NaN) are left out.
pub fn build_heart_rate_series(daily_stats: &[DailyStatRecord]) -> Vec<HeartRatePoint> {
    let series: Vec<HeartRatePoint> = daily_stats
        .iter()
        .filter_map(|day| {
            let resting = day.resting_hr.filter(|hr| *hr != 0.0 && !hr.is_nan())?;
            Some(HeartRatePoint {
                date: day.date.clone().unwrap_or_default(),
                resting,
                min: day.min_hr,
                max: day.max_hr,
            })
        })
        .collect();

    debug!(
        "Heart rate series: {} of {} days have a resting rate",
        series.len(),
        daily_stats.len()
    );

    series
}

/// Build the nightly sleep series
///
/// **Public** - main entry point for the sleep chart
///
/// Durations become hours formatted to one decimal. These are display
/// strings; parse them again before doing arithmetic.
pub fn build_sleep_series(sleep: &[SleepRecord]) -> Vec<SleepPoint> {
    sleep
        .iter()
        .map(|night| SleepPoint {
            date: night.date.clone().unwrap_or_default(),
            total_hours: format_hours(night.total_sleep_seconds),
            deep_hours: format_hours(night.deep_sleep_seconds),
            light_hours: format_hours(night.light_sleep_seconds),
            rem_hours: format_hours(night.rem_sleep_seconds),
            score: night.sleep_score,
        })
        .collect()
}

/// Seconds to hours with one decimal; missing counts as zero
pub fn format_hours(seconds: Option<f64>) -> String {
    format!("{:.1}", seconds.unwrap_or(0.0) / SECONDS_PER_HOUR)
}
