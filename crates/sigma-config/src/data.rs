//! Dataset location configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

fn default_root() -> String {
    String::from(".")
}

fn default_diary_dir() -> String {
    String::from("data/diary")
}

fn default_barcodes_dir() -> String {
    String::from("data/sequencing")
}

const fn default_strict_schema() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    /// Project root that the dataset directories are relative to.
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory holding the subject diaries (`parsed/subject_<n>.csv`).
    #[serde(default = "default_diary_dir")]
    pub diary_dir: String,

    /// Directory holding the sequencing barcode tables
    /// (`parsed_baseline/` and `parsed_exp/`).
    #[serde(default = "default_barcodes_dir")]
    pub barcodes_dir: String,

    /// Require identical headers across subject files before stacking them.
    #[serde(default = "default_strict_schema")]
    pub strict_schema: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            diary_dir: default_diary_dir(),
            barcodes_dir: default_barcodes_dir(),
            strict_schema: default_strict_schema(),
        }
    }
}

impl DataConfig {
    /// Config rooted at `root` with default directory names.
    #[must_use]
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    #[must_use]
    pub fn diary_path(&self) -> PathBuf {
        self.root_path().join(&self.diary_dir)
    }

    #[must_use]
    pub fn barcodes_path(&self) -> PathBuf {
        self.root_path().join(&self.barcodes_dir)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("data.root", &self.root),
            ("data.diary_dir", &self.diary_dir),
            ("data.barcodes_dir", &self.barcodes_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: String::from("must not be empty"),
                });
            }
        }

        // Diary and barcode files live under different parsed/ subdirectories,
        // but sharing the parent would make `parsed/` ambiguous for the parsers.
        if self.diary_dir == self.barcodes_dir {
            return Err(ConfigError::InvalidValue {
                field: String::from("data.barcodes_dir"),
                reason: String::from("must differ from data.diary_dir"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DataConfig::default();
        assert_eq!(config.root, ".");
        assert_eq!(config.diary_dir, "data/diary");
        assert_eq!(config.barcodes_dir, "data/sequencing");
        assert!(config.strict_schema);
    }

    #[test]
    fn paths_join_root() {
        let config = DataConfig::rooted_at("/srv/sigma");
        assert_eq!(config.diary_path(), PathBuf::from("/srv/sigma/data/diary"));
        assert_eq!(
            config.barcodes_path(),
            PathBuf::from("/srv/sigma/data/sequencing")
        );
    }

    #[test]
    fn empty_directory_is_rejected() {
        let config = DataConfig {
            diary_dir: String::from("  "),
            ..DataConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("data.diary_dir"));
    }

    #[test]
    fn shared_directory_is_rejected() {
        let config = DataConfig {
            barcodes_dir: String::from("data/diary"),
            ..DataConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
