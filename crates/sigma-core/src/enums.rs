//! Measurement periods and dataset families.
//!
//! All enums use `snake_case` serialization and parse case-insensitively from
//! their tag, so the same strings work in config files, on the command line and
//! in JSON output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

/// Study period a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Before the intervention (no mask).
    Baseline,
    /// During the intervention (mask wearing).
    Intervention,
}

impl Period {
    pub const ALL: [Self; 2] = [Self::Baseline, Self::Intervention];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Intervention => "intervention",
        }
    }

    /// The barcode dataset family that stores this period's sequencing data.
    #[must_use]
    pub const fn barcode_family(self) -> DatasetFamily {
        match self {
            Self::Baseline => DatasetFamily::Baseline,
            Self::Intervention => DatasetFamily::Intervention,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "intervention" => Ok(Self::Intervention),
            _ => Err(CoreError::InvalidPeriod(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetFamily
// ---------------------------------------------------------------------------

/// A family of per-subject CSV files.
///
/// ```text
/// diary        -> <diary_dir>/parsed/subject_<n>.csv
/// baseline     -> <barcodes_dir>/parsed_baseline/barcode0<n>.csv
/// intervention -> <barcodes_dir>/parsed_exp/barcode0<n>.csv
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetFamily {
    Diary,
    Baseline,
    Intervention,
}

impl DatasetFamily {
    pub const ALL: [Self; 3] = [Self::Diary, Self::Baseline, Self::Intervention];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diary => "diary",
            Self::Baseline => "baseline",
            Self::Intervention => "intervention",
        }
    }

    /// Subdirectory (below the family's configured directory) holding parsed files.
    #[must_use]
    pub const fn parsed_dir(self) -> &'static str {
        match self {
            Self::Diary => "parsed",
            Self::Baseline => "parsed_baseline",
            Self::Intervention => "parsed_exp",
        }
    }

    /// Barcode period of this family, `None` for diaries.
    #[must_use]
    pub const fn period(self) -> Option<Period> {
        match self {
            Self::Diary => None,
            Self::Baseline => Some(Period::Baseline),
            Self::Intervention => Some(Period::Intervention),
        }
    }
}

impl fmt::Display for DatasetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetFamily {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diary" => Ok(Self::Diary),
            "baseline" => Ok(Self::Baseline),
            "intervention" => Ok(Self::Intervention),
            _ => Err(CoreError::InvalidFamily(s.to_string())),
        }
    }
}
