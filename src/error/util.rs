//! Utility functions for error handling
//!
//! File access helpers that turn missing inputs into [`AnalysisError::MissingInput`]
//! before any work is started on them.

use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Open a file for reading, reporting a missing path as a missing input
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for log context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    ensure_input_exists(path, purpose)?;
    Ok(fs::File::open(path)?)
}

/// Read a whole file to a string, reporting a missing path as a missing input
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    ensure_input_exists(path, purpose)?;
    Ok(fs::read_to_string(path)?)
}

/// Fail with `MissingInput` unless `path` is an existing file
pub fn ensure_input_exists(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_file() {
        log::error!("File {} not found (needed for: {purpose})", path.display());
        return Err(AnalysisError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Create the parent directory of an output path if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
