//! Output writers for dashboard data.
//!
//! This module handles:
//! - JSON dashboard documents
//! - Terminal rendering of a single view

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_dashboard, write_dashboard};
pub use text::{render_view, View};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
