//! Blood oxygen saturation per diary day, and the tests run on it.
//!
//! Each diary day carries three measurement moments with a reading from the
//! right and the left index finger. Readings are rounded to two decimals
//! before any mean is taken. A derived mean is missing whenever one of its
//! readings is.

use chrono::NaiveDate;
use serde::Serialize;

use sigma_config::AnalysisConfig;
use sigma_core::SubjectId;
use sigma_data::schema::{DATE, MASK_TYPE, SPO2_MOMENTS};
use sigma_data::{DataError, DatasetStore, Row, Table, parse_date};

use crate::StatsError;
use crate::hypothesis::{Hypothesis, TestedHypothesis};
use crate::summary::{mean, round_to};
use crate::ttest::{Alternative, ttest_ind};

/// Mask type label that older exports use for a surgical mask.
const MEDICAL_LABEL: &str = "Medical";
const SURGICAL_LABEL: &str = "surgical";

/// One diary day's SpO2 readings and their means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spo2Day {
    pub date: Option<NaiveDate>,
    pub mask_type: Option<String>,
    /// `(right, left)` per measurement moment.
    pub readings: [(Option<f64>, Option<f64>); 3],
    pub moment_means: [Option<f64>; 3],
    pub mean: Option<f64>,
    pub right_mean: Option<f64>,
    pub left_mean: Option<f64>,
}

impl Spo2Day {
    fn from_row(row: Row<'_>) -> Self {
        let reading = |column: &str| {
            row.get(column)
                .and_then(sigma_data::Value::as_f64)
                .map(|value| round_to(value, 2))
        };
        let readings = SPO2_MOMENTS.map(|(right, left)| (reading(right), reading(left)));

        let moment_means = readings.map(|(right, left)| complete_mean(&[right, left]));
        let mean = complete_mean(&moment_means);
        let right_mean = complete_mean(&readings.map(|(right, _)| right));
        let left_mean = complete_mean(&readings.map(|(_, left)| left));

        let mask_type = row.get(MASK_TYPE).and_then(|value| {
            let label = value.to_string();
            match label.as_str() {
                "" => None,
                MEDICAL_LABEL => Some(SURGICAL_LABEL.to_string()),
                _ => Some(label),
            }
        });

        Self {
            date: row.get(DATE).and_then(|value| parse_date(&value.to_string())),
            mask_type,
            readings,
            moment_means,
            mean,
            right_mean,
            left_mean,
        }
    }

    /// Whether this day was recorded without a mask.
    #[must_use]
    pub fn unmasked(&self, no_mask_label: &str) -> bool {
        self.mask_type.as_deref() == Some(no_mask_label)
    }

    /// Whether this day counts as masked: anything but the no-mask label,
    /// including a blank mask type.
    #[must_use]
    pub fn masked(&self, no_mask_label: &str) -> bool {
        !self.unmasked(no_mask_label)
    }
}

fn complete_mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Option<Vec<f64>> = values.iter().copied().collect();
    mean(&present?)
}

/// SpO2 days of a diary table.
///
/// # Errors
///
/// [`StatsError::Data`] if any SpO2 column is absent.
pub fn spo2_days(table: &Table) -> Result<Vec<Spo2Day>, StatsError> {
    for column in SPO2_MOMENTS.iter().flat_map(|(right, left)| [*right, *left]) {
        if !table.has_column(column) {
            return Err(DataError::MissingColumn(column.to_string()).into());
        }
    }

    let days: Vec<Spo2Day> = table.iter().map(Spo2Day::from_row).collect();
    let undated = days.iter().filter(|day| day.date.is_none()).count();
    if undated > 0 {
        tracing::debug!(undated, "diary rows without a parseable date");
    }
    Ok(days)
}

fn load_days(store: &DatasetStore, subject: SubjectId) -> Result<Vec<Spo2Day>, StatsError> {
    let mut columns = vec![DATE, MASK_TYPE];
    columns.extend(SPO2_MOMENTS.iter().flat_map(|(right, left)| [*right, *left]));
    let table = store.diary(subject.get().into(), Some(columns.as_slice()))?;
    spo2_days(&table)
}

fn hand_hypothesis() -> Hypothesis {
    Hypothesis::new(
        "Is there a significant difference between the oxygen saturation of the left and right index finger?",
        "There is no significant difference in blood oxygen saturation between the right and left index finger.",
        "There is a significant difference in blood oxygen saturation between the right and left index finger.",
    )
}

fn mask_hypothesis() -> Hypothesis {
    Hypothesis::new(
        "Is the blood oxygen saturation significantly lower when wearing a KN95 mask than wearing no mask?",
        "The blood oxygen saturation is not significantly lower when wearing a KN95 mask.",
        "The blood oxygen saturation is significantly lower when wearing a KN95 mask.",
    )
}

/// A subject's SpO2 days and both per-subject tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSpo2 {
    pub subject: SubjectId,
    pub days: Vec<Spo2Day>,
    /// Right vs left hand means, two-sided.
    pub hands: TestedHypothesis,
    /// Masked vs unmasked day means, masked lower.
    pub mask: TestedHypothesis,
}

/// Compare hands and mask conditions for one subject.
///
/// # Errors
///
/// Loading errors, or [`StatsError::InsufficientData`] when either condition
/// has too few complete days.
pub fn subject_spo2(
    store: &DatasetStore,
    subject: SubjectId,
    analysis: &AnalysisConfig,
) -> Result<SubjectSpo2, StatsError> {
    let days = load_days(store, subject)?;

    let right: Vec<f64> = days.iter().filter_map(|day| day.right_mean).collect();
    let left: Vec<f64> = days.iter().filter_map(|day| day.left_mean).collect();
    let hands = ttest_ind(&right, &left, Alternative::TwoSided)?;

    let (masked, unmasked) = split_by_mask(&days, &analysis.no_mask_label);
    let mask = ttest_ind(&masked, &unmasked, Alternative::Less)?;

    tracing::debug!(
        %subject,
        days = days.len(),
        hands_p = hands.p_value,
        mask_p = mask.p_value,
        "spo2 tests"
    );

    Ok(SubjectSpo2 {
        subject,
        hands: TestedHypothesis::new(hand_hypothesis(), hands, analysis.alpha),
        mask: TestedHypothesis::new(mask_hypothesis(), mask, analysis.alpha),
        days,
    })
}

fn split_by_mask(days: &[Spo2Day], no_mask_label: &str) -> (Vec<f64>, Vec<f64>) {
    let pick = |keep: &dyn Fn(&Spo2Day) -> bool| -> Vec<f64> {
        days.iter()
            .filter(|day| keep(day))
            .filter_map(|day| day.mean)
            .collect()
    };
    (
        pick(&|day| day.masked(no_mask_label)),
        pick(&|day| day.unmasked(no_mask_label)),
    )
}

/// Average day mean of one subject with and without a mask.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskMeans {
    pub subject: SubjectId,
    pub masked: Option<f64>,
    pub unmasked: Option<f64>,
}

/// Cohort-wide mask comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaskComparison {
    pub subjects: Vec<MaskMeans>,
    /// All subjects' masked day means against all unmasked ones, masked lower.
    pub pooled: TestedHypothesis,
}

/// Pool every subject's day means by mask condition and test them.
///
/// # Errors
///
/// Loading errors, or [`StatsError::InsufficientData`] when the pooled
/// samples are too small.
pub fn mask_comparison(
    store: &DatasetStore,
    analysis: &AnalysisConfig,
) -> Result<MaskComparison, StatsError> {
    let mut subjects = Vec::new();
    let mut all_masked = Vec::new();
    let mut all_unmasked = Vec::new();

    for subject in SubjectId::all() {
        let days = load_days(store, subject)?;
        let (masked, unmasked) = split_by_mask(&days, &analysis.no_mask_label);
        subjects.push(MaskMeans {
            subject,
            masked: mean(&masked),
            unmasked: mean(&unmasked),
        });
        all_masked.extend(masked);
        all_unmasked.extend(unmasked);
    }

    let test = ttest_ind(&all_masked, &all_unmasked, Alternative::Less)?;
    Ok(MaskComparison {
        subjects,
        pooled: TestedHypothesis::new(mask_hypothesis(), test, analysis.alpha),
    })
}
