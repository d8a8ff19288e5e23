//! fitdash CLI
//!
//! Builds activity, heart rate and sleep dashboards from fitness CSV exports.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use fitdash::commands::{
    display_schema, display_version, execute_report, validate_args, validate_dashboard_file,
    ReportArgs,
};
use fitdash::output::View;

/// fitdash - dashboards from fitness CSV exports
#[derive(Parser, Debug)]
#[command(name = "fitdash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load CSV exports and write a dashboard
    Report {
        /// Directory holding activities.csv, daily_stats.csv and sleep.csv
        #[arg(short, long, env = "FITDASH_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// TOML config file with data_dir and [files] overrides
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Activities CSV (relative to the data directory)
        #[arg(long)]
        activities: Option<PathBuf>,

        /// Daily stats CSV (relative to the data directory)
        #[arg(long)]
        daily_stats: Option<PathBuf>,

        /// Sleep CSV (relative to the data directory)
        #[arg(long)]
        sleep: Option<PathBuf>,

        /// Output path for dashboard JSON (placed in artifacts/ by default)
        #[arg(short, long, default_value = "artifacts/dashboard.json")]
        output: PathBuf,

        /// View to print with --summary
        #[arg(long, value_enum, default_value_t = View::Overview)]
        view: View,

        /// Print the selected view to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a dashboard JSON file
    Validate {
        /// Path to dashboard JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            data_dir,
            config,
            activities,
            daily_stats,
            sleep,
            mut output,
            view,
            summary,
        } => {
            // Ensure output goes to artifacts/ if no directory is specified
            if output.parent().map(|p| p.as_os_str().is_empty()).unwrap_or(true) {
                output = PathBuf::from("artifacts").join(output);
            }

            let args = ReportArgs {
                data_dir,
                config,
                activities,
                daily_stats,
                sleep,
                output_json: output,
                view,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_dashboard_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
