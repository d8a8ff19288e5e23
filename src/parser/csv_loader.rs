//! CSV loading for the three fitness exports.
//!
//! Rows are deserialized straight into the record types. Rows missing a
//! required field are discarded here so the aggregator never sees them;
//! rows that cannot be decoded at all are skipped and counted.

use super::records::{ActivityRecord, DailyStatRecord, SleepRecord};
use crate::utils::config::DataPaths;
use crate::utils::error::LoadError;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Records loaded from one CSV file plus bookkeeping about the load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable<T> {
    /// Records that passed required-field filtering
    pub records: Vec<T>,

    /// Data rows read (excluding the header)
    pub rows_read: usize,

    /// Rows dropped for missing a required field
    pub discarded: usize,

    /// Rows that could not be decoded
    pub skipped: usize,
}

/// All three inputs, fully materialized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub activities: Vec<ActivityRecord>,
    pub daily_stats: Vec<DailyStatRecord>,
    pub sleep: Vec<SleepRecord>,
}

/// Load `activities.csv`, dropping rows without an `activity_id`
pub fn load_activities(path: impl AsRef<Path>) -> Result<LoadedTable<ActivityRecord>, LoadError> {
    load_table(path.as_ref(), &["activity_id"], |r: &ActivityRecord| {
        is_present(r.activity_id.as_deref())
    })
}

/// Load `daily_stats.csv`, dropping rows without a `date`
pub fn load_daily_stats(
    path: impl AsRef<Path>,
) -> Result<LoadedTable<DailyStatRecord>, LoadError> {
    load_table(path.as_ref(), &["date"], |r: &DailyStatRecord| {
        is_present(r.date.as_deref())
    })
}

/// Load `sleep.csv`, dropping rows without a `date` or a total sleep duration
///
/// A total of zero seconds counts as missing.
pub fn load_sleep(path: impl AsRef<Path>) -> Result<LoadedTable<SleepRecord>, LoadError> {
    load_table(
        path.as_ref(),
        &["date", "total_sleep_seconds"],
        |r: &SleepRecord| {
            is_present(r.date.as_deref())
                && r.total_sleep_seconds.is_some_and(|s| s != 0.0)
        },
    )
}

/// Load all three inputs
///
/// **Public** - main entry point for loading
///
/// # Errors
/// Any file that cannot be opened or has no usable header fails the whole load.
pub fn load_dataset(paths: &DataPaths) -> Result<Dataset, LoadError> {
    let activities = load_activities(&paths.activities)?;
    log_table("activities", &activities);

    let daily_stats = load_daily_stats(&paths.daily_stats)?;
    log_table("daily stats", &daily_stats);

    let sleep = load_sleep(&paths.sleep)?;
    log_table("sleep", &sleep);

    Ok(Dataset {
        activities: activities.records,
        daily_stats: daily_stats.records,
        sleep: sleep.records,
    })
}

/// Shared loader: open, check headers, deserialize, filter.
///
/// **Private** - internal helper for the per-file loaders
fn load_table<T, F>(path: &Path, required: &[&str], keep: F) -> Result<LoadedTable<T>, LoadError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> bool,
{
    debug!("Loading CSV: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::HeaderFailed {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut discarded = 0usize;
    let mut skipped = 0usize;

    for (idx, result) in reader.deserialize::<T>().enumerate() {
        rows_read += 1;

        match result {
            Ok(record) if keep(&record) => records.push(record),
            Ok(_) => discarded += 1,
            Err(e) => {
                // +2: one for the header, one for 1-based line numbers
                warn!("{}: skipping line {}: {}", path.display(), idx + 2, e);
                skipped += 1;
            }
        }
    }

    Ok(LoadedTable {
        records,
        rows_read,
        discarded,
        skipped,
    })
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn log_table<T>(label: &str, table: &LoadedTable<T>) {
    info!(
        "Loaded {} {} records ({} rows read)",
        table.records.len(),
        label,
        table.rows_read
    );
    if table.discarded > 0 || table.skipped > 0 {
        debug!(
            "{}: {} rows missing required fields, {} undecodable",
            label, table.discarded, table.skipped
        );
    }
}
