//! Error types for sortbench-analyzer
//!
//! Load and schema failures are terminal for the run: no report is produced.
//! Render failures only cost the chart; the textual report has already been written.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Analyzer error types
#[derive(Error, Debug)]
pub enum Error {
    /// Source missing, unreadable, or not a parseable table
    #[error("Load error: {0}\nRun the sorting experiment first to produce the results file.")]
    Load(String),

    /// Required columns absent from the parsed schema
    #[error("Schema error: missing required columns: {}", missing.join(", "))]
    Schema {
        /// Every missing column, in required-column order
        missing: Vec<String>,
    },

    /// A required value is null, mistyped, or outside the data model
    #[error("Invalid record at data row {row}, column {column}: {reason}")]
    InvalidRecord {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column name
        column: String,
        /// What is wrong with the value
        reason: String,
    },

    /// Chart rendering failed (non-fatal for the report)
    #[error("Render error: {0}")]
    Render(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    /// Whether the run must abort before any report is emitted
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}
