//! Error handling for case analysis runs.
//!
//! Only input acquisition (reading the case file, templates and configuration) can fail a
//! run. Classification and aggregation are total over their inputs and never return errors.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can abort an analysis run
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// An input file (case data, report template or configuration) does not exist
    #[error("Input not found: {}", path.display())]
    MissingInput {
        /// The path that was expected to exist
        path: PathBuf,
    },

    /// A required column is absent from the case data
    #[error("Column '{column}' not found in input")]
    ColumnNotFound {
        /// Configured column name
        column: String,
    },

    /// The configuration is malformed or inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting Arrow arrays
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error reading or writing JSON documents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Shorthand for a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error means an input was unavailable
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
