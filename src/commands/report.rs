//! Report command implementation.
//!
//! The report command:
//! 1. Resolves input paths from config file and flags
//! 2. Loads the three CSV exports
//! 3. Runs the aggregation pipeline
//! 4. Writes the dashboard JSON
//! 5. Optionally prints one view to stdout

use crate::aggregator::build_dashboard;
use crate::commands::models::ReportArgs;
use crate::output::{render_view, write_dashboard};
use crate::parser::{load_dataset, Dashboard};
use crate::utils::config::{load_config, DashboardConfig};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The dashboard that was written, or Err with context if any step fails
///
/// # Errors
/// * Config file read/parse failures
/// * Missing or unreadable CSV files
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<Dashboard> {
    let start_time = Instant::now();

    let config = resolve_config(&args)?;
    let paths = config.resolve_paths();
    info!("Data directory: {}", config.data_dir.display());
    debug!("Input paths: {:?}", paths);

    info!("Loading CSV exports...");
    let dataset = load_dataset(&paths).context("Failed to load CSV exports")?;

    info!("Aggregating...");
    let dashboard = build_dashboard(&dataset);

    write_dashboard(&dashboard, &args.output_json).context("Failed to write dashboard JSON")?;
    info!("✓ Dashboard written to: {}", args.output_json.display());

    if args.print_summary {
        println!("{}", render_view(&dashboard, args.view));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(dashboard)
}

/// Merge the optional config file with command line overrides
///
/// **Public** - exposed for testing path resolution
pub fn resolve_config(args: &ReportArgs) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(activities) = &args.activities {
        config.files.activities = activities.clone();
    }
    if let Some(daily_stats) = &args.daily_stats {
        config.files.daily_stats = daily_stats.clone();
    }
    if let Some(sleep) = &args.sleep {
        config.files.sleep = sleep.clone();
    }

    Ok(config)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output_json.is_dir() {
        anyhow::bail!(
            "Output path is a directory: {}",
            args.output_json.display()
        );
    }

    if let Some(data_dir) = &args.data_dir {
        if !data_dir.is_dir() {
            anyhow::bail!("Data directory not found: {}", data_dir.display());
        }
    }

    if let Some(config) = &args.config {
        if !config.is_file() {
            anyhow::bail!("Config file not found: {}", config.display());
        }
    }

    Ok(())
}
