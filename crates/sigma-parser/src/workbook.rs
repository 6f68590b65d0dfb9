//! Worksheet reading for `.xlsx` diaries.
//!
//! Subjects keep their diary on the second sheet of the workbook; the first
//! holds study notes. The first row of a sheet is its header row.

use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use sigma_data::{Table, Value};

use crate::ParseError;

/// Zero-based position of the diary sheet in a subject workbook.
pub const DIARY_SHEET: usize = 1;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read the sheet at `index` into a [`Table`], taking its first row as headers.
///
/// An empty sheet gives an empty table.
///
/// # Errors
///
/// [`ParseError::Workbook`] if the file is not a readable workbook,
/// [`ParseError::MissingSheet`] if it has fewer than `index + 1` sheets.
pub fn read_sheet(path: &Path, index: usize) -> Result<Table, ParseError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ParseError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(index)
        .ok_or_else(|| ParseError::MissingSheet {
            path: path.to_path_buf(),
            index,
        })?
        .map_err(|source| ParseError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        tracing::debug!(path = %path.display(), index, "empty worksheet");
        return Ok(Table::default());
    };
    let columns: Vec<String> = header
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    let body: Vec<Vec<Value>> = rows.map(|row| row.iter().map(cell_value).collect()).collect();

    tracing::debug!(
        path = %path.display(),
        index,
        columns = columns.len(),
        rows = body.len(),
        "read worksheet"
    );
    Ok(Table::new(columns, body)?)
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Error(error) => {
            tracing::warn!(%error, "dropping spreadsheet error cell");
            Value::Null
        }
        #[allow(clippy::cast_precision_loss)]
        Data::Int(number) => Value::Number(*number as f64),
        Data::Float(number) => Value::Number(*number),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell.as_datetime().map_or_else(
            || Value::parse(&cell.to_string()),
            |stamp| Value::Text(stamp.format(DATETIME_FORMAT).to_string()),
        ),
        Data::String(_) | Data::Bool(_) | Data::DurationIso(_) => Value::parse(&cell.to_string()),
    }
}
