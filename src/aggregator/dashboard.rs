//! Assemble every aggregate into one dashboard document.

use super::metrics::calculate_summary;
use super::rollup::{build_daily_rollup, build_type_distribution};
use super::series::{build_heart_rate_series, build_sleep_series};
use crate::parser::csv_loader::Dataset;
use crate::parser::schema::{Dashboard, RecordCounts};
use crate::utils::config::SCHEMA_VERSION;
use chrono::{DateTime, Utc};
use log::{debug, info};

/// Run the full aggregation pipeline over a dataset
///
/// **Public** - main entry point for aggregation
///
/// Pure apart from the generation timestamp; every call recomputes
/// everything from the three inputs.
pub fn build_dashboard(dataset: &Dataset) -> Dashboard {
    build_dashboard_at(dataset, Utc::now())
}

/// Same as `build_dashboard` with a fixed generation time
pub fn build_dashboard_at(dataset: &Dataset, generated_at: DateTime<Utc>) -> Dashboard {
    let stats = calculate_summary(&dataset.activities, &dataset.daily_stats);
    info!("Summary: {}", stats.summary());

    let daily_activity = build_daily_rollup(&dataset.activities);
    let activity_types = build_type_distribution(&dataset.activities);
    let heart_rate = build_heart_rate_series(&dataset.daily_stats);
    let sleep = build_sleep_series(&dataset.sleep);

    debug!(
        "Dashboard: {} days, {} types, {} heart rate points, {} nights",
        daily_activity.len(),
        activity_types.len(),
        heart_rate.len(),
        sleep.len()
    );

    Dashboard {
        version: SCHEMA_VERSION.to_string(),
        generated_at: generated_at.to_rfc3339(),
        record_counts: RecordCounts {
            activities: dataset.activities.len(),
            daily_stats: dataset.daily_stats.len(),
            sleep: dataset.sleep.len(),
        },
        summary: stats.formatted(),
        daily_activity,
        activity_types,
        heart_rate,
        sleep,
    }
}
