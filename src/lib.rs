//! fitdash
//!
//! Activity, daily health and sleep dashboards from exported fitness
//! CSV files.
//!
//! The library loads `activities.csv`, `daily_stats.csv` and `sleep.csv`,
//! aggregates them into summary cards and chart series, and writes the
//! result as a JSON dashboard document. The `fitdash` binary wraps this
//! in a CLI.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
