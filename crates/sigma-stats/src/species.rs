//! Species composition of sequencing tables.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use sigma_core::{CoreError, Period, SubjectId};
use sigma_data::schema::{BARCODE, SPECIES};
use sigma_data::{DataError, DatasetStore, Table};

use crate::StatsError;
use crate::summary::round_to;

/// Label of the bucket that collects everything outside the top species.
pub const OTHER: &str = "other";

/// Reads of one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCount {
    pub species: String,
    pub count: usize,
}

/// Share of one species, as a fraction or a percentage depending on the producer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesShare {
    pub species: String,
    pub value: f64,
}

/// Species counts, most frequent first. Ties keep first-appearance order and
/// rows without a species are skipped.
///
/// # Errors
///
/// [`StatsError::Data`] if the table has no `species` column.
pub fn species_counts(table: &Table) -> Result<Vec<SpeciesCount>, StatsError> {
    let mut counts: Vec<SpeciesCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for species in table.texts(SPECIES)? {
        if let Some(&position) = positions.get(&species) {
            counts[position].count += 1;
        } else {
            positions.insert(species.clone(), counts.len());
            counts.push(SpeciesCount { species, count: 1 });
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}

/// Fraction of reads per species, most frequent first.
///
/// # Errors
///
/// Same as [`species_counts`].
pub fn species_proportions(table: &Table) -> Result<Vec<SpeciesShare>, StatsError> {
    let counts = species_counts(table)?;
    let total: usize = counts.iter().map(|c| c.count).sum();

    #[allow(clippy::cast_precision_loss)]
    Ok(counts
        .into_iter()
        .map(|c| SpeciesShare {
            value: c.count as f64 / total as f64,
            species: c.species,
        })
        .collect())
}

/// Fraction of reads that belong to `species`.
///
/// Every read counts towards the total, including unclassified ones.
///
/// # Errors
///
/// [`StatsError::EmptyCounts`] if the table has no rows,
/// [`StatsError::Data`] if the table has no `species` column.
pub fn species_fraction(table: &Table, species: &str) -> Result<f64, StatsError> {
    let observed = table.column(SPECIES)?;
    if observed.is_empty() {
        return Err(StatsError::EmptyCounts);
    }
    let hits = observed
        .iter()
        .filter(|value| value.as_str() == Some(species))
        .count();

    #[allow(clippy::cast_precision_loss)]
    Ok(hits as f64 / observed.len() as f64)
}

/// The `n` most frequent species in percent, plus an [`OTHER`] bucket.
///
/// Fractions are rounded to two decimals before scaling, and the bucket takes
/// whatever the rounded top shares leave of 100.
#[must_use]
pub fn top_species(proportions: &[SpeciesShare], n: usize) -> Vec<SpeciesShare> {
    let mut top: Vec<SpeciesShare> = proportions
        .iter()
        .take(n)
        .map(|share| SpeciesShare {
            species: share.species.clone(),
            value: round_to(share.value, 2),
        })
        .collect();

    let covered: f64 = top.iter().map(|share| share.value).sum();
    top.push(SpeciesShare {
        species: OTHER.to_string(),
        value: 1.0 - covered,
    });

    for share in &mut top {
        share.value *= 100.0;
    }
    top
}

/// One species in a baseline/intervention comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionRow {
    pub species: String,
    pub baseline: f64,
    pub intervention: f64,
}

/// Union of two compositions sorted by species name; absent species count as 0.
#[must_use]
pub fn compare_composition(
    baseline: &[SpeciesShare],
    intervention: &[SpeciesShare],
) -> Vec<CompositionRow> {
    let lookup = |shares: &[SpeciesShare], species: &str| {
        shares
            .iter()
            .find(|share| share.species == species)
            .map_or(0.0, |share| share.value)
    };

    let mut names: Vec<&str> = baseline
        .iter()
        .chain(intervention)
        .map(|share| share.species.as_str())
        .collect();
    names.sort_unstable();
    names.dedup();

    names
        .into_iter()
        .map(|species| CompositionRow {
            species: species.to_string(),
            baseline: lookup(baseline, species),
            intervention: lookup(intervention, species),
        })
        .collect()
}

/// Side-by-side ranking of the most frequent species in both periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankRow {
    pub rank: usize,
    pub baseline_species: String,
    pub baseline_count: usize,
    pub intervention_species: String,
    pub intervention_count: usize,
}

/// Pair the top `n` species of each period by rank.
///
/// # Errors
///
/// [`StatsError::LengthMismatch`] when the periods yield a different number
/// of ranked species.
pub fn rank_table(
    baseline: &[SpeciesCount],
    intervention: &[SpeciesCount],
    n: usize,
) -> Result<Vec<RankRow>, StatsError> {
    let baseline = &baseline[..n.min(baseline.len())];
    let intervention = &intervention[..n.min(intervention.len())];
    if baseline.len() != intervention.len() {
        return Err(StatsError::LengthMismatch {
            left: baseline.len(),
            right: intervention.len(),
        });
    }

    Ok(baseline
        .iter()
        .zip(intervention)
        .enumerate()
        .map(|(index, (b, i))| RankRow {
            rank: index + 1,
            baseline_species: b.species.clone(),
            baseline_count: b.count,
            intervention_species: i.species.clone(),
            intervention_count: i.count,
        })
        .collect())
}

/// Which reads of the stacked cohort table to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectSelector {
    Subject(SubjectId),
    /// Every read tagged with a cohort barcode.
    Total,
}

impl SubjectSelector {
    /// Keep the rows whose `barcode` tag matches this selector.
    ///
    /// # Errors
    ///
    /// [`StatsError::Data`] if the table has no `barcode` column.
    pub fn select(self, table: &Table) -> Result<Table, StatsError> {
        if !table.has_column(BARCODE) {
            return Err(DataError::MissingColumn(BARCODE.to_string()).into());
        }
        Ok(table.filter_rows(|row| {
            let tagged = row
                .get(BARCODE)
                .and_then(|value| value.as_str())
                .and_then(SubjectId::from_barcode);
            match self {
                Self::Subject(subject) => tagged == Some(subject),
                Self::Total => tagged.is_some(),
            }
        }))
    }

    /// Label used in composition columns, e.g. `Subject 2 baseline`.
    #[must_use]
    pub fn label(self, period: Period) -> String {
        format!("{self} {period}")
    }
}

impl fmt::Display for SubjectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subject(subject) => write!(f, "{subject}"),
            Self::Total => f.write_str("Total"),
        }
    }
}

impl FromStr for SubjectSelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("total") || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::Total);
        }
        trimmed.parse::<SubjectId>().map(Self::Subject)
    }
}

/// Species composition of a selection of the cohort for one period.
///
/// # Errors
///
/// Any error from loading the stacked cohort table or selecting from it.
pub fn composition(
    store: &DatasetStore,
    period: Period,
    selector: SubjectSelector,
) -> Result<Vec<SpeciesShare>, StatsError> {
    let cohort = store.all_subjects(period)?;
    let selected = selector.select(&cohort)?;
    tracing::debug!(%period, %selector, reads = selected.len(), "selected reads");
    species_proportions(&selected)
}
