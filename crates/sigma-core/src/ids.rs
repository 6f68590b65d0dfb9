//! Subject identifiers for the fixed study cohort.
//!
//! Subjects are numbered densely from 1 to [`COHORT_SIZE`]. A subject number is
//! also the key of its sequencing sample: subject `n` maps to barcode
//! `barcode0n` in every microbiome export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of subjects in the cohort.
pub const COHORT_SIZE: u8 = 5;

/// A validated subject identifier in `1..=COHORT_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SubjectId(u8);

impl SubjectId {
    /// Validate a raw subject number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSubject`] when `subject` is outside `1..=COHORT_SIZE`.
    pub fn new(subject: u32) -> Result<Self, CoreError> {
        match u8::try_from(subject) {
            Ok(value) if (1..=COHORT_SIZE).contains(&value) => Ok(Self(value)),
            _ => Err(CoreError::InvalidSubject {
                subject,
                cohort_size: COHORT_SIZE,
            }),
        }
    }

    /// All subjects of the cohort in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=COHORT_SIZE).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of the subject, for indexing per-subject arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Sequencing barcode tag of this subject (`barcode01` .. `barcode05`).
    #[must_use]
    pub fn barcode(self) -> String {
        format!("barcode{:02}", self.0)
    }

    /// File name of the parsed diary for this subject.
    #[must_use]
    pub fn diary_file_name(self) -> String {
        format!("subject_{}.csv", self.0)
    }

    /// File name of the parsed barcode table for this subject.
    #[must_use]
    pub fn barcode_file_name(self) -> String {
        format!("{}.csv", self.barcode())
    }

    /// Resolve a barcode tag back to its subject, if it belongs to the cohort.
    #[must_use]
    pub fn from_barcode(tag: &str) -> Option<Self> {
        let digits = tag.trim().strip_prefix("barcode")?;
        if digits.len() != 2 {
            return None;
        }
        digits
            .parse::<u32>()
            .ok()
            .and_then(|n| Self::new(n).ok())
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject {}", self.0)
    }
}

impl TryFrom<u32> for SubjectId {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for u32 {
    fn from(value: SubjectId) -> Self {
        Self::from(value.0)
    }
}

impl FromStr for SubjectId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| CoreError::Validation(format!("subject must be a number, got '{s}'")))?;
        Self::new(value)
    }
}
