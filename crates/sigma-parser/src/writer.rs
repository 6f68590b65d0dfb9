//! CSV output for converted tables.

use std::fs;
use std::path::Path;

use sigma_data::Table;

use crate::ParseError;

/// Write `table` with a header row, creating parent directories as needed.
///
/// Missing cells are written as empty fields.
///
/// # Errors
///
/// [`ParseError::Io`] if the directory cannot be created,
/// [`ParseError::Write`] if the file cannot be written.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), ParseError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let wrap = |source| ParseError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    writer.write_record(table.columns()).map_err(wrap)?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(ToString::to_string))
            .map_err(wrap)?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}
