use crate::output::View;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Directory holding the CSV exports (overrides the config file)
    pub data_dir: Option<PathBuf>,

    /// Optional TOML configuration file
    pub config: Option<PathBuf>,

    /// Per-file overrides, relative to the data directory unless absolute
    pub activities: Option<PathBuf>,
    pub daily_stats: Option<PathBuf>,
    pub sleep: Option<PathBuf>,

    /// Output path for the dashboard JSON
    pub output_json: PathBuf,

    /// View to print when `print_summary` is set
    pub view: View,

    /// Print the selected view to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_dir: None,
            config: None,
            activities: None,
            daily_stats: None,
            sleep: None,
            output_json: PathBuf::from("artifacts/dashboard.json"),
            view: View::Overview,
            print_summary: false,
        }
    }
}
