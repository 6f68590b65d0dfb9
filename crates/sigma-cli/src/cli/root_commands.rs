use std::path::PathBuf;

use clap::{Args, Subcommand};
use sigma_core::Period;
use sigma_stats::{DiversityIndex, SubjectSelector};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print a subject's diary.
    Diary(DiaryArgs),
    /// Print a subject's sequencing reads for one period.
    Barcodes(BarcodesArgs),
    /// Print every subject's sequencing reads for one period, stacked.
    Cohort(CohortArgs),
    /// Species composition of a subject or the whole cohort.
    Species(SpeciesArgs),
    /// Most frequent species per period, side by side.
    Ranks(RanksArgs),
    /// Diversity index per subject, before and during the intervention.
    Diversity(DiversityArgs),
    /// SpO2 readings and the mask and hand t-tests.
    Spo2(Spo2Args),
    /// Average spots per period and the paired t-test.
    Spots,
    /// Cutibacterium acnes share per subject and period.
    Acnes,
    /// Convert raw exports into the parsed dataset layout.
    Parse {
        #[command(subcommand)]
        action: ParseCommands,
    },
    /// Print the resolved configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct DiaryArgs {
    /// Subject number (1-5)
    pub subject: u32,

    /// Comma-separated columns to keep
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BarcodesArgs {
    /// Subject number (1-5)
    pub subject: u32,

    /// baseline or intervention
    pub period: Period,

    /// Comma-separated columns to keep
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CohortArgs {
    /// baseline or intervention
    pub period: Period,
}

#[derive(Clone, Debug, Args)]
pub struct SpeciesArgs {
    /// Subject number or `total`
    pub subject: SubjectSelector,

    /// Only this period (both periods are compared otherwise)
    #[arg(long)]
    pub period: Option<Period>,

    /// Keep this many species and bucket the rest (defaults to `analysis.top_species`)
    #[arg(long)]
    pub top: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct RanksArgs {
    /// Subject number (1-5)
    pub subject: u32,

    /// Number of ranks (falls back to `--limit`, then 20)
    #[arg(short, long)]
    pub n: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct DiversityArgs {
    /// simpson or shannon
    #[arg(default_value = "simpson")]
    pub index: DiversityIndex,
}

#[derive(Clone, Debug, Args)]
pub struct Spo2Args {
    /// Only this subject (the pooled mask comparison otherwise)
    #[arg(long)]
    pub subject: Option<u32>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ParseCommands {
    /// Convert a subject's raw diary export into `parsed/subject_<n>.csv`.
    Diary {
        /// Raw diary workbook (.xlsx) or CSV export of its diary sheet
        input: PathBuf,

        /// Subject number (1-5)
        #[arg(long)]
        subject: u32,
    },
    /// Split a sequencing run into per-subject `barcode0<n>.csv` files.
    Sequencing {
        /// Sequencing run CSV
        input: PathBuf,

        /// baseline or intervention
        #[arg(long)]
        period: Period,
    },
}
