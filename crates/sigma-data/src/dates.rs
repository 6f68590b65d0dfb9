//! Diary date parsing.
//!
//! Parsed diaries store ISO dates. Raw exports also carry spreadsheet
//! timestamps and day-first dates, so parsing accepts those too.

use chrono::{NaiveDate, NaiveDateTime};

/// Format dates are written in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 4] = [DATE_FORMAT, "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d-%m-%Y %H:%M"];

/// Parse a date cell, `None` if no known format matches.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|timestamp| timestamp.date())
        })
}
