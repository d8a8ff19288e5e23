//! Configuration and constants for the CLI.
//!
//! Defaults live here as constants. An optional TOML file can override the
//! data directory and the three input file names; CLI flags override both.

use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ACTIVITIES_FILE: &str = "activities.csv";
pub const DEFAULT_DAILY_STATS_FILE: &str = "daily_stats.csv";
pub const DEFAULT_SLEEP_FILE: &str = "sleep.csv";

// Unit conversions used by the aggregator
pub const METERS_PER_KM: f64 = 1000.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Group key for activities with no type label
pub const UNKNOWN_ACTIVITY_TYPE: &str = "unknown";

/// Dashboard configuration, usually read from `fitdash.toml`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DashboardConfig {
    /// Directory holding the three CSV exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Input file names, relative to `data_dir` unless absolute
    #[serde(default)]
    pub files: InputFiles,
}

/// File names of the three CSV inputs
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct InputFiles {
    #[serde(default = "default_activities_file")]
    pub activities: PathBuf,

    #[serde(default = "default_daily_stats_file")]
    pub daily_stats: PathBuf,

    #[serde(default = "default_sleep_file")]
    pub sleep: PathBuf,
}

/// Fully resolved input paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub activities: PathBuf,
    pub daily_stats: PathBuf,
    pub sleep: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_activities_file() -> PathBuf {
    PathBuf::from(DEFAULT_ACTIVITIES_FILE)
}

fn default_daily_stats_file() -> PathBuf {
    PathBuf::from(DEFAULT_DAILY_STATS_FILE)
}

fn default_sleep_file() -> PathBuf {
    PathBuf::from(DEFAULT_SLEEP_FILE)
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            activities: default_activities_file(),
            daily_stats: default_daily_stats_file(),
            sleep: default_sleep_file(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            files: InputFiles::default(),
        }
    }
}

impl DashboardConfig {
    /// Join the configured file names onto the data directory.
    ///
    /// Absolute file names are kept as they are.
    pub fn resolve_paths(&self) -> DataPaths {
        DataPaths {
            activities: self.data_dir.join(&self.files.activities),
            daily_stats: self.data_dir.join(&self.files.daily_stats),
            sleep: self.data_dir.join(&self.files.sleep),
        }
    }
}

/// Load a dashboard configuration from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - file cannot be read
/// * `ConfigError::ParseFailed` - file is not valid TOML for this schema
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Reading config from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let config: DashboardConfig = toml::from_str(&content)?;

    debug!(
        "Config loaded: data_dir={}, activities={}, daily_stats={}, sleep={}",
        config.data_dir.display(),
        config.files.activities.display(),
        config.files.daily_stats.display(),
        config.files.sleep.display()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_paths() {
        let paths = DashboardConfig::default().resolve_paths();
        assert_eq!(paths.activities, PathBuf::from("data/activities.csv"));
        assert_eq!(paths.daily_stats, PathBuf::from("data/daily_stats.csv"));
        assert_eq!(paths.sleep, PathBuf::from("data/sleep.csv"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"exports\"\n[files]\nsleep = \"sleep_2024.csv\"").unwrap();

        let config = load_config(file.path()).unwrap();
        let paths = config.resolve_paths();

        assert_eq!(paths.activities, PathBuf::from("exports/activities.csv"));
        assert_eq!(paths.sleep, PathBuf::from("exports/sleep_2024.csv"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = [").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config("/nonexistent/fitdash.toml");
        assert!(matches!(result, Err(ConfigError::ReadFailed(_))));
    }
}
