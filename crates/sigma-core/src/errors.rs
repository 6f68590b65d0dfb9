//! Cross-cutting error types for SIGMA.
//!
//! These errors describe contract violations that any crate can detect while
//! validating caller input. I/O and parsing failures live in the crate that
//! performs them (e.g., `DataError` in `sigma-data`). A unified error is
//! deferred to `sigma-cli` where all crate errors converge via `anyhow`.

use thiserror::Error;

/// Errors raised when a request falls outside the fixed study design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Subject identifier outside `1..=cohort_size`.
    #[error("Invalid subject {subject}: expected a value between 1 and {cohort_size}")]
    InvalidSubject { subject: u32, cohort_size: u8 },

    /// Period tag that is neither `baseline` nor `intervention`.
    #[error("Invalid period '{0}': expected \"baseline\" or \"intervention\"")]
    InvalidPeriod(String),

    /// Dataset family tag that is not one of the known families.
    #[error("Invalid dataset family '{0}': expected \"diary\", \"baseline\" or \"intervention\"")]
    InvalidFamily(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
