//! Aggregation of loaded records into dashboard data.
//!
//! This module transforms the three record sequences into:
//! - Summary statistics
//! - Per-day and per-type activity rollups
//! - Heart rate and sleep chart series

pub mod dashboard;
pub mod metrics;
pub mod rollup;
pub mod series;

// Re-export main types and functions
pub use dashboard::{build_dashboard, build_dashboard_at};
pub use metrics::{calculate_summary, SummaryStats};
pub use rollup::{build_daily_rollup, build_type_distribution, parse_date_key};
pub use series::{build_heart_rate_series, build_sleep_series, format_hours};
