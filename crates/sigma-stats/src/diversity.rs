//! Alpha diversity of species counts.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use sigma_core::{Period, SubjectId};
use sigma_data::DatasetStore;
use sigma_data::schema::SPECIES;

use crate::StatsError;
use crate::species::species_counts;
use crate::summary::round_to;

/// Supported alpha diversity indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiversityIndex {
    /// Gini-Simpson, `1 - sum(p^2)`.
    Simpson,
    /// Shannon entropy in bits.
    Shannon,
}

impl DiversityIndex {
    pub const ALL: [Self; 2] = [Self::Simpson, Self::Shannon];

    /// Evaluate this index over raw counts.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptyCounts`] if the counts sum to zero.
    pub fn compute(self, counts: &[usize]) -> Result<f64, StatsError> {
        match self {
            Self::Simpson => simpson(counts),
            Self::Shannon => shannon(counts),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Simpson => "Simpsons Diversity Index",
            Self::Shannon => "Shannon Diversity Index",
        }
    }
}

impl fmt::Display for DiversityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simpson => "simpson",
            Self::Shannon => "shannon",
        })
    }
}

impl FromStr for DiversityIndex {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simpson" => Ok(Self::Simpson),
            "shannon" => Ok(Self::Shannon),
            _ => Err(StatsError::UnknownIndex(s.to_string())),
        }
    }
}

fn proportions(counts: &[usize]) -> Result<Vec<f64>, StatsError> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Err(StatsError::EmptyCounts);
    }
    #[allow(clippy::cast_precision_loss)]
    Ok(counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| count as f64 / total as f64)
        .collect())
}

/// Gini-Simpson index, `1 - sum(p^2)`.
///
/// # Errors
///
/// [`StatsError::EmptyCounts`] if the counts sum to zero.
pub fn simpson(counts: &[usize]) -> Result<f64, StatsError> {
    Ok(1.0 - proportions(counts)?.iter().map(|p| p * p).sum::<f64>())
}

/// Shannon entropy in bits, `-sum(p log2 p)`.
///
/// # Errors
///
/// [`StatsError::EmptyCounts`] if the counts sum to zero.
pub fn shannon(counts: &[usize]) -> Result<f64, StatsError> {
    Ok(-proportions(counts)?.iter().map(|p| p * p.log2()).sum::<f64>())
}

/// One subject's diversity in both periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiversityRow {
    pub subject: SubjectId,
    pub baseline: f64,
    pub intervention: f64,
    /// `intervention - baseline`, from the rounded values.
    pub delta: f64,
}

/// Index per subject and period, rounded to three decimals.
///
/// # Errors
///
/// Any error loading a subject's barcode tables, or [`StatsError::EmptyCounts`]
/// for a table without species.
pub fn diversity_table(
    store: &DatasetStore,
    index: DiversityIndex,
) -> Result<Vec<DiversityRow>, StatsError> {
    SubjectId::all()
        .map(|subject| {
            let baseline = period_index(store, subject, Period::Baseline, index)?;
            let intervention = period_index(store, subject, Period::Intervention, index)?;
            Ok(DiversityRow {
                subject,
                baseline,
                intervention,
                delta: intervention - baseline,
            })
        })
        .collect()
}

fn period_index(
    store: &DatasetStore,
    subject: SubjectId,
    period: Period,
    index: DiversityIndex,
) -> Result<f64, StatsError> {
    let table = store.barcode_table(subject.get().into(), period, Some(&[SPECIES][..]))?;
    let counts: Vec<usize> = species_counts(&table)?.into_iter().map(|c| c.count).collect();
    let value = round_to(index.compute(&counts)?, 3);
    tracing::trace!(%subject, %period, %index, value, "diversity");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
    }

    #[test]
    fn simpson_reference_values() {
        close(simpson(&[1]).unwrap(), 0.0);
        close(simpson(&[1, 1]).unwrap(), 0.5);
        close(simpson(&[3, 2]).unwrap(), 0.48);
    }

    #[test]
    fn shannon_reference_values() {
        close(shannon(&[7]).unwrap(), 0.0);
        close(shannon(&[1, 1]).unwrap(), 1.0);
        close(shannon(&[1, 1, 1, 1]).unwrap(), 2.0);
    }

    #[test]
    fn zero_counts_are_ignored() {
        close(shannon(&[1, 0, 1]).unwrap(), 1.0);
        close(simpson(&[0, 2, 2]).unwrap(), 0.5);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0, 0])]
    fn empty_counts_are_rejected(#[case] counts: &[usize]) {
        assert!(matches!(simpson(counts), Err(StatsError::EmptyCounts)));
        assert!(matches!(shannon(counts), Err(StatsError::EmptyCounts)));
    }

    #[test]
    fn index_names() {
        assert_eq!("Shannon".parse::<DiversityIndex>().unwrap(), DiversityIndex::Shannon);
        assert_eq!(DiversityIndex::Simpson.display_name(), "Simpsons Diversity Index");
        assert!(matches!(
            "chao1".parse::<DiversityIndex>(),
            Err(StatsError::UnknownIndex(name)) if name == "chao1"
        ));
    }
}
