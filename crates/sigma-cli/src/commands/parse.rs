use std::path::PathBuf;

use serde::Serialize;
use sigma_core::{DatasetFamily, SubjectId};
use sigma_parser::{convert_diary_file, split_sequencing_file};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Converted {
    input: PathBuf,
    outputs: Vec<PathBuf>,
    rows: usize,
}

/// Handle `sigma parse`.
///
/// Output lands where the configured dataset layout expects it, so the
/// query commands see the converted files straight away.
pub fn handle(action: &ParseCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paths = ctx.store.paths();
    let converted = match action {
        ParseCommands::Diary { input, subject } => {
            let subject = SubjectId::new(*subject)?;
            let target = paths.path(subject, DatasetFamily::Diary);
            let diary = convert_diary_file(input, &target)?;
            Converted {
                input: input.clone(),
                outputs: vec![target],
                rows: diary.len(),
            }
        }
        ParseCommands::Sequencing { input, period } => {
            let target = paths.family_dir(period.barcode_family());
            let outputs = split_sequencing_file(input, &target)?;
            let rows = outputs
                .iter()
                .map(|path| sigma_data::read_csv(path).map(|table| table.len()))
                .sum::<Result<usize, _>>()?;
            Converted {
                input: input.clone(),
                outputs,
                rows,
            }
        }
    };
    output(&converted, flags.format)
}
