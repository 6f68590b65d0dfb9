//! # sigma-stats
//!
//! Analyses over the cohort datasets: species composition and alpha diversity
//! of the sequencing tables, SpO2 and spot counts from the diaries, and the
//! hypothesis tests that decide the study questions.
//!
//! Distribution functions are implemented here rather than pulled from a
//! numerics crate; they only need to be accurate enough for p-values.

pub mod acnes;
pub mod distributions;
pub mod diversity;
pub mod error;
pub mod hypothesis;
pub mod species;
pub mod spo2;
pub mod spots;
pub mod summary;
pub mod ttest;

pub use diversity::DiversityIndex;
pub use error::StatsError;
pub use hypothesis::{Conclusion, Hypothesis, TestedHypothesis, Verdict};
pub use species::SubjectSelector;
pub use ttest::{Alternative, TTest};
