//! CSV reading into [`Table`]s.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::DataError;
use crate::table::{Table, Value};

/// Read a CSV file with a header row into a table.
///
/// # Errors
///
/// Returns [`DataError::MissingFile`] if `path` does not exist, and
/// [`DataError::Csv`] if the file is not well-formed CSV (including rows whose
/// field count differs from the header).
pub fn read_csv(path: &Path) -> Result<Table, DataError> {
    if !path.is_file() {
        return Err(DataError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let table = read_records(reader, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        "loaded csv"
    );

    Ok(table)
}

/// Read CSV text with a header row from any reader.
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns [`DataError::Csv`] if the input is not well-formed CSV.
pub fn read_csv_from<R: Read>(input: R, origin: &Path) -> Result<Table, DataError> {
    let reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    read_records(reader, origin)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, origin: &Path) -> Result<Table, DataError> {
    let csv_error = |source| DataError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(Value::parse).collect());
    }

    Table::new(columns, rows)
}
