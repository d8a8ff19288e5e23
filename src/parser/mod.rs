//! CSV loading and schema definitions.
//!
//! This module handles:
//! - Record types for the three CSV exports
//! - Loading and required-field filtering
//! - Defining the output dashboard schema

pub mod csv_loader;
pub mod records;
pub mod schema;

// Re-export main types
pub use csv_loader::{
    load_activities, load_daily_stats, load_dataset, load_sleep, Dataset, LoadedTable,
};
pub use records::{ActivityRecord, DailyStatRecord, SleepRecord};
pub use schema::{
    ActivityTypeShare, DailyActivity, Dashboard, HeartRatePoint, RecordCounts, SleepPoint,
    SummaryCard,
};
