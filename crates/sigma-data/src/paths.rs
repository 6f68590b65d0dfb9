//! File layout of the parsed datasets.

use std::path::PathBuf;

use sigma_config::DataConfig;
use sigma_core::{DatasetFamily, SubjectId};

/// Resolves `(subject, family)` pairs to CSV paths.
///
/// ```text
/// <root>/<diary_dir>/parsed/subject_<n>.csv
/// <root>/<barcodes_dir>/parsed_baseline/barcode0<n>.csv
/// <root>/<barcodes_dir>/parsed_exp/barcode0<n>.csv
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    diary_dir: PathBuf,
    barcodes_dir: PathBuf,
}

impl DatasetPaths {
    #[must_use]
    pub fn new(config: &DataConfig) -> Self {
        Self {
            diary_dir: config.diary_path(),
            barcodes_dir: config.barcodes_path(),
        }
    }

    /// Directory holding every subject's file of `family`.
    #[must_use]
    pub fn family_dir(&self, family: DatasetFamily) -> PathBuf {
        let parent = match family {
            DatasetFamily::Diary => &self.diary_dir,
            DatasetFamily::Baseline | DatasetFamily::Intervention => &self.barcodes_dir,
        };
        parent.join(family.parsed_dir())
    }

    #[must_use]
    pub fn path(&self, subject: SubjectId, family: DatasetFamily) -> PathBuf {
        let file_name = match family {
            DatasetFamily::Diary => subject.diary_file_name(),
            DatasetFamily::Baseline | DatasetFamily::Intervention => subject.barcode_file_name(),
        };
        self.family_dir(family).join(file_name)
    }
}
