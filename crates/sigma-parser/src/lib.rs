//! # sigma-parser
//!
//! Converters from raw study exports to the parsed per-subject layout that
//! `sigma-data` reads:
//!
//! - **Diary**: one subject's workbook (or a CSV export of its diary sheet)
//!   becomes `subject_<n>.csv` with normalised headers, numbers and dates
//! - **Sequencing**: one sequencing run becomes `barcode0<n>.csv` per
//!   subject, split on the `barcode` column

pub mod diary;
pub mod error;
pub mod input;
pub mod sequencing;
pub mod workbook;
pub mod writer;

pub use diary::{convert_diary, convert_diary_file};
pub use error::ParseError;
pub use sequencing::{split_by_barcode, split_sequencing_file};
pub use workbook::read_sheet;
pub use writer::write_csv;
