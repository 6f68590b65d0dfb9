//! Diary export conversion.
//!
//! A raw diary is the subject's workbook, read from its diary sheet, or a CSV
//! export of that sheet. Headers are free text ("SpO2-M1 (%) RH", "Mask type", ...). Conversion maps them onto the
//! parsed diary columns, drops days without a date and normalises values:
//!
//! - numeric cells keep only digits and dots (`"98 %"` becomes `98`)
//! - SpO2 fractions below 1 are scaled to percent
//! - dates are written as ISO dates, with years before 2021 moved to 2021

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use sigma_data::schema::{
    ACNE, DATE, DIARY_COLUMNS, DIARY_NUMERIC_COLUMNS, ENVIRONMENT, FACIAL_HYGIENE, FINISH,
    MAKE_UP, MASK_TYPE, SHAVING, SKIN_NOTE, SLEEP, SPO2_M1_LEFT, SPO2_M1_RIGHT, SPO2_M2_LEFT,
    SPO2_M2_RIGHT, SPO2_M3_LEFT, SPO2_M3_RIGHT, SPO2_MOMENTS, START, STRESS_LEVEL, TEMPERATURE,
};
use sigma_data::{DATE_FORMAT, DataError, Table, Value, parse_date, read_csv};

use crate::ParseError;
use crate::input::validate_input;
use crate::workbook::{DIARY_SHEET, read_sheet};
use crate::writer::write_csv;

/// Earliest study year; earlier years are spreadsheet autofill mistakes.
pub const STUDY_YEAR: i32 = 2021;

/// Raw header (lowercased) to parsed column.
const HEADER_ALIASES: [(&str, &str); 18] = [
    ("date", DATE),
    ("mask type", MASK_TYPE),
    ("shaving", SHAVING),
    ("facial hygiene", FACIAL_HYGIENE),
    ("make-up", MAKE_UP),
    ("environment", ENVIRONMENT),
    (
        "note about kinds of skin and numbers of spots im the left and right part",
        SKIN_NOTE,
    ),
    ("acne(total)", ACNE),
    ("stress level(1-10)", STRESS_LEVEL),
    ("sleep (h)", SLEEP),
    ("spo2-m1 (%) rh", SPO2_M1_RIGHT),
    ("spo2-m1 (%) lh", SPO2_M1_LEFT),
    ("spo2-m2 (%) rh", SPO2_M2_RIGHT),
    ("spo2-m2 (%) lh", SPO2_M2_LEFT),
    ("spo2-m3 (%) rh", SPO2_M3_RIGHT),
    ("spo2-m3 (%) lh", SPO2_M3_LEFT),
    ("start (t)", START),
    ("finish (t)", FINISH),
];

/// Parsed column for a raw header, if the diary keeps it.
///
/// Already-parsed names map to themselves. The temperature header carries a
/// degree sign whose encoding varies between exports, so it matches by prefix.
#[must_use]
pub fn canonical_column(raw: &str) -> Option<&'static str> {
    let header = raw.trim().to_lowercase();
    if let Some(column) = DIARY_COLUMNS.iter().find(|column| **column == header) {
        return Some(*column);
    }
    if let Some((_, column)) = HEADER_ALIASES.iter().find(|(alias, _)| *alias == header) {
        return Some(*column);
    }
    header.starts_with("temperature").then_some(TEMPERATURE)
}

/// Keep digits and dots and read the rest as a number.
///
/// Returns `None` for cells that are empty after cleaning or still not a number.
#[must_use]
pub fn clean_float(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(raw, "dropping unreadable numeric cell");
            None
        }
    }
}

/// Move dates before the study year into it, keeping month and day.
#[must_use]
pub fn normalize_year(date: NaiveDate) -> NaiveDate {
    if date.year() < STUDY_YEAR {
        date.with_year(STUDY_YEAR).unwrap_or(date)
    } else {
        date
    }
}

fn is_spo2(column: &str) -> bool {
    SPO2_MOMENTS
        .iter()
        .any(|(right, left)| *right == column || *left == column)
}

fn convert_cell(column: &str, value: &Value) -> Value {
    if !DIARY_NUMERIC_COLUMNS.contains(&column) {
        return value.clone();
    }
    if value.is_null() {
        return Value::Null;
    }
    match clean_float(&value.to_string()) {
        Some(reading) if is_spo2(column) && reading < 1.0 => Value::Number(reading * 100.0),
        Some(number) => Value::Number(number),
        None => Value::Null,
    }
}

/// Convert a raw diary table into the parsed diary layout.
///
/// Output columns follow the parsed diary order; raw columns without a
/// parsed counterpart are dropped. When two raw headers map to the same
/// column, the first one wins.
///
/// # Errors
///
/// [`ParseError::Data`] if the export has no date column,
/// [`ParseError::InvalidDate`] for a date no known format matches.
pub fn convert_diary(raw: &Table) -> Result<Table, ParseError> {
    let mut sources: Vec<(&'static str, usize)> = Vec::new();
    for (index, header) in raw.columns().iter().enumerate() {
        match canonical_column(header) {
            Some(column) if sources.iter().any(|(seen, _)| *seen == column) => {
                tracing::warn!(%header, column, "duplicate diary column ignored");
            }
            Some(column) => sources.push((column, index)),
            None => tracing::debug!(%header, "dropping unmapped diary column"),
        }
    }
    sources.sort_by_key(|(column, _)| DIARY_COLUMNS.iter().position(|c| c == column));

    let Some(&(_, date_index)) = sources.iter().find(|(column, _)| *column == DATE) else {
        return Err(DataError::MissingColumn(DATE.to_string()).into());
    };

    let mut rows = Vec::with_capacity(raw.len());
    let mut undated = 0_usize;
    for (row_number, row) in raw.rows().iter().enumerate().map(|(i, row)| (i + 1, row)) {
        let date_cell = &row[date_index];
        if date_cell.is_null() {
            undated += 1;
            continue;
        }
        let text = date_cell.to_string();
        let date = parse_date(&text).ok_or_else(|| ParseError::InvalidDate {
            row: row_number,
            value: text.clone(),
        })?;

        rows.push(
            sources
                .iter()
                .map(|&(column, index)| {
                    if column == DATE {
                        Value::Text(normalize_year(date).format(DATE_FORMAT).to_string())
                    } else {
                        convert_cell(column, &row[index])
                    }
                })
                .collect(),
        );
    }

    if undated > 0 {
        tracing::info!(undated, "dropped diary rows without a date");
    }

    let columns = sources.iter().map(|(column, _)| (*column).to_string()).collect();
    Ok(Table::new(columns, rows)?)
}

fn is_workbook(input: &Path) -> bool {
    input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Convert the raw diary at `input` and write it to `output`.
///
/// `.xlsx` inputs are read from their diary sheet; anything else must be a
/// `.csv` export.
///
/// # Errors
///
/// Any input validation, read, conversion or write error.
pub fn convert_diary_file(input: &Path, output: &Path) -> Result<Table, ParseError> {
    let raw = if is_workbook(input) {
        validate_input(input, "xlsx")?;
        read_sheet(input, DIARY_SHEET)?
    } else {
        validate_input(input, "csv")?;
        read_csv(input)?
    };
    let converted = convert_diary(&raw)?;
    write_csv(&converted, output)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        days = converted.len(),
        "converted diary"
    );
    Ok(converted)
}
