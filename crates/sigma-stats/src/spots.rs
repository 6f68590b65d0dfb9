//! Acne spot counts from the diary, intervention rows against baseline rows.

use serde::Serialize;

use sigma_config::AnalysisConfig;
use sigma_core::SubjectId;
use sigma_data::schema::{ACNE, DATE, MASK_TYPE};
use sigma_data::{DatasetStore, Table};

use crate::StatsError;
use crate::hypothesis::{Hypothesis, TestedHypothesis};
use crate::ttest::{Alternative, ttest_rel};

/// Average spot count of one subject per period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotAverages {
    pub subject: SubjectId,
    pub intervention: f64,
    pub baseline: f64,
}

/// Average the `acne` column over the first `intervention_rows` rows and over the rest.
///
/// A day without a count adds nothing to the total but still counts as a day.
///
/// # Errors
///
/// [`StatsError::Data`] without an `acne` column, [`StatsError::InsufficientData`]
/// when either part of the diary has no rows.
pub fn split_averages(table: &Table, intervention_rows: usize) -> Result<(f64, f64), StatsError> {
    let average = |part: Table| -> Result<f64, StatsError> {
        let total: f64 = part.numbers(ACNE)?.iter().sum();
        if part.is_empty() {
            return Err(StatsError::InsufficientData {
                test: "spot average",
                needed: 1,
                got: 0,
            });
        }
        #[allow(clippy::cast_precision_loss)]
        Ok(total / part.len() as f64)
    };
    let intervention = average(table.slice(0..intervention_rows))?;
    let baseline = average(table.slice(intervention_rows..table.len()))?;
    Ok((intervention, baseline))
}

/// Per-subject spot averages with the paired test across the cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotsReport {
    pub subjects: Vec<SpotAverages>,
    /// Intervention averages against baseline averages, intervention greater.
    pub paired: TestedHypothesis,
}

fn spots_hypothesis() -> Hypothesis {
    Hypothesis::new(
        "Are the number of spots significantly higher when wearing a KN95 mask than not wearing a mask?",
        "The amount of spots is not significantly higher when wearing a KN95 mask.",
        "The amount of spots is significantly higher when wearing a KN95 mask.",
    )
}

/// Spot averages for every subject and a paired one-sided t-test over them.
///
/// # Errors
///
/// Loading errors, or any error from [`split_averages`] and the paired test.
pub fn spots_report(
    store: &DatasetStore,
    analysis: &AnalysisConfig,
) -> Result<SpotsReport, StatsError> {
    let columns = [DATE, MASK_TYPE, ACNE];
    let subjects = SubjectId::all()
        .map(|subject| {
            let diary = store.diary(subject.get().into(), Some(&columns[..]))?;
            let (intervention, baseline) = split_averages(&diary, analysis.intervention_rows)?;
            Ok(SpotAverages {
                subject,
                intervention,
                baseline,
            })
        })
        .collect::<Result<Vec<_>, StatsError>>()?;

    let intervention: Vec<f64> = subjects.iter().map(|s| s.intervention).collect();
    let baseline: Vec<f64> = subjects.iter().map(|s| s.baseline).collect();
    let test = ttest_rel(&intervention, &baseline, Alternative::Greater)?;
    tracing::debug!(p_value = test.p_value, "spots paired test");

    Ok(SpotsReport {
        subjects,
        paired: TestedHypothesis::new(spots_hypothesis(), test, analysis.alpha),
    })
}
