//! A synthetic study on disk with effects large enough to test against.
//!
//! - every diary has 12 days; days 1-8 are masked (day 1 still says "Medical")
//! - masked SpO2 sits two points below unmasked SpO2
//! - subject `n` averages `n` more spots during the intervention
//! - baseline reads: 3 C. acnes and `n + 1` S. capitis
//! - intervention reads: 1 C. acnes and 3 S. epidermidis

#![allow(dead_code)]

use std::fs;

use sigma_config::{AnalysisConfig, DataConfig};
use sigma_core::{DatasetFamily, SubjectId};
use sigma_data::{DatasetPaths, DatasetStore};
use tempfile::TempDir;

pub const ACNES: &str = "Cutibacterium acnes";
pub const CAPITIS: &str = "Staphylococcus capitis";
pub const EPIDERMIDIS: &str = "Staphylococcus epidermidis";

pub struct Study {
    pub dir: TempDir,
    pub config: DataConfig,
}

impl Study {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let config = DataConfig::rooted_at(dir.path());
        let study = Self { dir, config };

        for subject in SubjectId::all() {
            study.write(subject, DatasetFamily::Diary, &diary_csv(subject));
            study.write(subject, DatasetFamily::Baseline, &baseline_csv(subject));
            study.write(subject, DatasetFamily::Intervention, &intervention_csv(subject));
        }
        study
    }

    pub fn store(&self) -> DatasetStore {
        DatasetStore::new(&self.config)
    }

    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig::default()
    }

    pub fn write(&self, subject: SubjectId, family: DatasetFamily, contents: &str) {
        let path = DatasetPaths::new(&self.config).path(subject, family);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(path, contents).expect("write fixture file");
    }
}

pub fn subject(n: u32) -> SubjectId {
    SubjectId::new(n).expect("valid subject")
}

fn diary_csv(subject: SubjectId) -> String {
    let n = u32::from(subject);
    let mut out = String::from(
        "date,masktype,acne,spo2_m1_r,spo2_m1_l,spo2_m2_r,spo2_m2_l,spo2_m3_r,spo2_m3_l\n",
    );
    for day in 1..=12_u32 {
        let masked = day <= 8;
        let mask = match (day, masked) {
            (1, _) => "Medical",
            (_, true) => "surgical",
            _ => "None",
        };
        let acne = if masked { n + day % 2 } else { day % 2 };
        let base = if masked { 96 } else { 98 };
        let right = format!("{base}.{}", day % 3);
        let left = format!("{base}.{}", 2 * (day % 2));
        out.push_str(&format!(
            "2021-10-{day:02},{mask},{acne},{right},{left},{right},{left},{right},{left}\n"
        ));
    }
    out
}

fn baseline_csv(subject: SubjectId) -> String {
    let tag = subject.barcode();
    let mut out = String::from("read_id,barcode,species\n");
    for read in 0..3 {
        out.push_str(&format!("a{read},{tag},{ACNES}\n"));
    }
    for read in 0..=u32::from(subject) {
        out.push_str(&format!("c{read},{tag},{CAPITIS}\n"));
    }
    out
}

fn intervention_csv(subject: SubjectId) -> String {
    let tag = subject.barcode();
    format!(
        "read_id,barcode,species\n\
         i0,{tag},{ACNES}\n\
         i1,{tag},{EPIDERMIDIS}\n\
         i2,{tag},{EPIDERMIDIS}\n\
         i3,{tag},{EPIDERMIDIS}\n"
    )
}
