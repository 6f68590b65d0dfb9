//! Shared fixtures: a complete five-subject cohort written into a temp dir.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use sigma_config::DataConfig;
use sigma_core::{DatasetFamily, SubjectId};
use sigma_data::{DatasetPaths, DatasetStore};
use tempfile::TempDir;

pub const DIARY_HEADER: &str = "date,masktype,acne,sleep,spo2_m1_r,spo2_m1_l";
pub const BARCODE_HEADER: &str = "read_id,barcode,species";

/// A temporary cohort on disk plus a store pointed at it.
pub struct Cohort {
    pub dir: TempDir,
    pub config: DataConfig,
}

impl Cohort {
    /// Every subject gets a diary with `subject + 2` days and barcode tables
    /// whose first rows follow the scenario used across the tests.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let config = DataConfig::rooted_at(dir.path());
        let cohort = Self { dir, config };

        for subject in SubjectId::all() {
            cohort.write(subject, DatasetFamily::Diary, &diary_csv(subject));
            cohort.write(subject, DatasetFamily::Baseline, &baseline_csv(subject));
            cohort.write(subject, DatasetFamily::Intervention, &intervention_csv(subject));
        }
        cohort
    }

    pub fn store(&self) -> DatasetStore {
        DatasetStore::new(&self.config)
    }

    pub fn permissive_store(&self) -> DatasetStore {
        DatasetStore::new(&DataConfig {
            strict_schema: false,
            ..self.config.clone()
        })
    }

    /// Overwrite one subject's file with `contents`.
    pub fn write(&self, subject: SubjectId, family: DatasetFamily, contents: &str) {
        let path = DatasetPaths::new(&self.config).path(subject, family);
        write_file(&path, contents);
    }

    pub fn remove(&self, subject: SubjectId, family: DatasetFamily) {
        let path = DatasetPaths::new(&self.config).path(subject, family);
        fs::remove_file(path).expect("remove fixture file");
    }
}

pub fn subject(n: u32) -> SubjectId {
    SubjectId::new(n).expect("valid subject")
}

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(path, contents).expect("write fixture file");
}

pub fn diary_csv(subject: SubjectId) -> String {
    let n = u32::from(subject);
    let mut out = format!("{DIARY_HEADER}\n");
    for day in 1..=n + 2 {
        let mask = if day % 2 == 0 { "surgical" } else { "None" };
        out.push_str(&format!(
            "2021-05-{day:02},{mask},{acne},{sleep},97.{day},98.{n}\n",
            acne = (day + n) % 4,
            sleep = 6 + day % 3,
        ));
    }
    out
}

pub fn baseline_csv(subject: SubjectId) -> String {
    let tag = subject.barcode();
    if u32::from(subject) == 1 {
        return format!(
            "{BARCODE_HEADER}\n\
             r1,{tag},Cutibacterium acnes\n\
             r2,{tag},Cutibacterium acnes\n\
             r3,{tag},Staphylococcus capitis\n\
             r4,{tag},Cutibacterium acnes\n\
             r5,{tag},Staphylococcus capitis\n"
        );
    }
    let mut out = format!("{BARCODE_HEADER}\n");
    for read in 0..u32::from(subject) + 1 {
        let species = if read % 2 == 0 {
            "Staphylococcus epidermidis"
        } else {
            "Cutibacterium acnes"
        };
        out.push_str(&format!("b{read},{tag},{species}\n"));
    }
    out
}

pub fn intervention_csv(subject: SubjectId) -> String {
    let tag = subject.barcode();
    let mut out = format!("{BARCODE_HEADER}\n");
    for read in 0..3 {
        let species = if read == 0 {
            "Staphylococcus capitis"
        } else {
            "Staphylococcus saccharolyticus"
        };
        out.push_str(&format!("i{read},{tag},{species}\n"));
    }
    out
}
