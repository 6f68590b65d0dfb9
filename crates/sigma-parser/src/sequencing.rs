//! Sequencing export splitting.
//!
//! One sequencing run holds the reads of every subject, tagged by a `barcode`
//! column. Splitting writes one `barcode0<n>.csv` per subject with the rows
//! of that barcode, columns unchanged.

use std::path::{Path, PathBuf};

use sigma_core::SubjectId;
use sigma_data::schema::BARCODE;
use sigma_data::{DataError, Table, read_csv};

use crate::ParseError;
use crate::input::validate_input;
use crate::writer::write_csv;

/// Rows of each cohort subject, in subject order.
///
/// Reads whose barcode belongs to no subject are dropped.
///
/// # Errors
///
/// [`ParseError::Data`] if the export has no `barcode` column.
pub fn split_by_barcode(run: &Table) -> Result<Vec<(SubjectId, Table)>, ParseError> {
    if !run.has_column(BARCODE) {
        return Err(DataError::MissingColumn(BARCODE.to_string()).into());
    }

    let parts: Vec<(SubjectId, Table)> = SubjectId::all()
        .map(|subject| {
            let tag = subject.barcode();
            let reads = run.filter_rows(|row| {
                row.get(BARCODE)
                    .and_then(|value| value.as_str())
                    .is_some_and(|barcode| barcode.trim() == tag)
            });
            (subject, reads)
        })
        .collect();

    let kept: usize = parts.iter().map(|(_, reads)| reads.len()).sum();
    if kept < run.len() {
        tracing::info!(dropped = run.len() - kept, "reads without a cohort barcode");
    }
    Ok(parts)
}

/// Split the sequencing CSV at `input` into per-subject files under `output_dir`.
///
/// Returns the written paths in subject order.
///
/// # Errors
///
/// Any input validation, read, split or write error.
pub fn split_sequencing_file(input: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    validate_input(input, "csv")?;
    let run = read_csv(input)?;

    let mut written = Vec::new();
    for (subject, reads) in split_by_barcode(&run)? {
        let path = output_dir.join(subject.barcode_file_name());
        write_csv(&reads, &path)?;
        tracing::debug!(%subject, reads = reads.len(), path = %path.display(), "wrote subject reads");
        written.push(path);
    }
    Ok(written)
}
