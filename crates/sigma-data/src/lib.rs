//! # sigma-data
//!
//! Dataset access layer for the SIGMA cohort.
//!
//! Translates a `(subject, family, period, projection)` request into a
//! [`Table`] read from the parsed CSV exports. Three families exist, each
//! with one file per subject:
//!
//! - `diary` -- daily self-reported measurements (SpO2, spots, sleep, ...)
//! - `baseline` -- microbiome reads sequenced before the intervention
//! - `intervention` -- microbiome reads sequenced during the intervention
//!
//! The layer is stateless beyond its resolved paths: tables are read fresh on
//! every call and returned as immutable values.

pub mod dates;
pub mod error;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod store;
pub mod table;

pub use dates::{DATE_FORMAT, parse_date};
pub use error::DataError;
pub use loader::{read_csv, read_csv_from};
pub use paths::DatasetPaths;
pub use store::DatasetStore;
pub use table::{Row, SchemaMode, Table, Value};
