//! JSON dashboard output writer.
//!
//! Writes Dashboard structs to JSON files with proper formatting.

use super::validate_path;
use crate::parser::schema::Dashboard;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a dashboard to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `dashboard` - Dashboard data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_dashboard(
    dashboard: &Dashboard,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing dashboard to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, dashboard)?;

    info!(
        "Dashboard written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a dashboard from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_dashboard(input_path: impl AsRef<Path>) -> Result<Dashboard, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading dashboard from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let dashboard: Dashboard = serde_json::from_reader(file)?;

    debug!(
        "Dashboard loaded: version {}, generated {}",
        dashboard.version, dashboard.generated_at
    );

    Ok(dashboard)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
