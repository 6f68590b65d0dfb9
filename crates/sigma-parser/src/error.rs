//! Parser error types for sigma-parser.

use std::path::PathBuf;

/// Errors that can occur while converting raw exports.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid input path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    #[error("row {row}: cannot read date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("cannot read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("workbook {path} has no sheet at position {index}")]
    MissingSheet { path: PathBuf, index: usize },

    #[error("Data error: {0}")]
    Data(#[from] sigma_data::DataError),

    #[error("CSV write error for {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
