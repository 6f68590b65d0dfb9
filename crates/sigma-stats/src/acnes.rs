//! Share of *Cutibacterium acnes* reads per subject and period.

use serde::Serialize;

use sigma_core::{Period, SubjectId};
use sigma_data::DatasetStore;
use sigma_data::schema::SPECIES;

use crate::StatsError;
use crate::species::species_fraction;

pub const CUTIBACTERIUM_ACNES: &str = "Cutibacterium acnes";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcnesShare {
    pub subject: SubjectId,
    pub baseline: f64,
    pub intervention: f64,
    /// Change from baseline to intervention in percentage points.
    pub change_points: f64,
}

/// C. acnes fraction of every subject's reads in both periods.
///
/// # Errors
///
/// Loading errors, or [`StatsError::EmptyCounts`] for a period without reads.
pub fn acnes_shares(store: &DatasetStore) -> Result<Vec<AcnesShare>, StatsError> {
    SubjectId::all()
        .map(|subject| {
            let baseline = period_share(store, subject, Period::Baseline)?;
            let intervention = period_share(store, subject, Period::Intervention)?;
            Ok(AcnesShare {
                subject,
                baseline,
                intervention,
                change_points: (intervention - baseline) * 100.0,
            })
        })
        .collect()
}

fn period_share(store: &DatasetStore, subject: SubjectId, period: Period) -> Result<f64, StatsError> {
    let table = store.barcode_table(subject.get().into(), period, Some(&[SPECIES][..]))?;
    species_fraction(&table, CUTIBACTERIUM_ACNES)
}
