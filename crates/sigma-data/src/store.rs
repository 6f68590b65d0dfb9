//! Dataset access for the fixed cohort.
//!
//! Every call reads its backing file fresh from disk; nothing is cached and
//! nothing is written.

use sigma_config::DataConfig;
use sigma_core::{DatasetFamily, Period, SubjectId};

use crate::DataError;
use crate::loader::read_csv;
use crate::paths::DatasetPaths;
use crate::table::{SchemaMode, Table};

/// Read-only access to the parsed per-subject CSV files.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    paths: DatasetPaths,
    schema: SchemaMode,
}

impl DatasetStore {
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            paths: DatasetPaths::new(config),
            schema: SchemaMode::from_strict(config.strict_schema),
        }
    }

    #[must_use]
    pub const fn paths(&self) -> &DatasetPaths {
        &self.paths
    }

    #[must_use]
    pub const fn schema_mode(&self) -> SchemaMode {
        self.schema
    }

    /// A subject's diary, optionally projected to `columns`.
    ///
    /// Projection keeps the requested columns that exist, in file order.
    ///
    /// # Errors
    ///
    /// [`DataError::Core`] wrapping `InvalidSubject` for subjects outside the
    /// cohort, [`DataError::MissingFile`] or [`DataError::Csv`] for unreadable files.
    pub fn diary(&self, subject: u32, columns: Option<&[&str]>) -> Result<Table, DataError> {
        self.table(subject, DatasetFamily::Diary, columns)
    }

    /// A subject's sequencing table for `period`, optionally projected to `columns`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::diary`].
    pub fn barcode_table(
        &self,
        subject: u32,
        period: Period,
        columns: Option<&[&str]>,
    ) -> Result<Table, DataError> {
        self.table(subject, period.barcode_family(), columns)
    }

    /// Every subject's sequencing table for `period`, stacked in subject order.
    ///
    /// Rows keep their `barcode` tag so callers can still tell subjects apart.
    ///
    /// # Errors
    ///
    /// [`DataError::MissingFile`] or [`DataError::Csv`] for any unreadable
    /// subject file, [`DataError::SchemaMismatch`] when schema checking is strict
    /// and the subject files disagree on their columns.
    pub fn all_subjects(&self, period: Period) -> Result<Table, DataError> {
        let family = period.barcode_family();
        let tables = SubjectId::all()
            .map(|subject| self.load(subject, family))
            .collect::<Result<Vec<_>, _>>()?;

        let stacked = Table::concat(tables, self.schema)?;
        tracing::debug!(%period, rows = stacked.len(), "stacked cohort barcode tables");
        Ok(stacked)
    }

    /// Any family's table for a subject, optionally projected to `columns`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::diary`].
    pub fn table(
        &self,
        subject: u32,
        family: DatasetFamily,
        columns: Option<&[&str]>,
    ) -> Result<Table, DataError> {
        let subject = SubjectId::new(subject)?;
        let table = self.load(subject, family)?;
        Ok(match columns {
            Some(columns) => table.project(columns),
            None => table,
        })
    }

    fn load(&self, subject: SubjectId, family: DatasetFamily) -> Result<Table, DataError> {
        read_csv(&self.paths.path(subject, family))
    }
}
