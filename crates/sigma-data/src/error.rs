//! Data access error types.

use std::path::PathBuf;

use sigma_core::CoreError;

/// Errors that can occur while locating, reading or combining dataset tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Request outside the study design (bad subject or period).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Backing CSV file does not exist.
    #[error("Missing data file: {}", path.display())]
    MissingFile {
        /// Path that was resolved for the request.
        path: PathBuf,
    },

    /// CSV file exists but could not be parsed.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        /// File being read.
        path: PathBuf,
        /// Underlying parser error.
        source: csv::Error,
    },

    /// I/O error outside of CSV parsing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Subject tables disagree on their columns and cannot be stacked.
    #[error("Schema mismatch in block {block}: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        /// 1-based position of the offending table in the union.
        block: usize,
        /// Columns of the first table.
        expected: Vec<String>,
        /// Columns of the offending table.
        found: Vec<String>,
    },

    /// A row does not have one cell per column.
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column required by the caller is absent.
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

impl DataError {
    /// The contract violation behind this error, if any.
    #[must_use]
    pub const fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}
