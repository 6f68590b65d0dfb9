//! Statistics error types.

/// Errors from summary statistics and hypothesis tests.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Error from the dataset access layer.
    #[error("data error: {0}")]
    Data(#[from] sigma_data::DataError),

    /// A sample is too small for the requested statistic.
    #[error("insufficient data for {test}: need at least {needed} observations, got {got}")]
    InsufficientData {
        test: &'static str,
        needed: usize,
        got: usize,
    },

    /// Paired inputs differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Diversity index requested over no observations.
    #[error("cannot compute a diversity index over empty counts")]
    EmptyCounts,

    /// Unknown diversity index name.
    #[error("unknown diversity index '{0}': expected \"simpson\" or \"shannon\"")]
    UnknownIndex(String),
}
