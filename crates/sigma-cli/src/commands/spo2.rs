use sigma_core::SubjectId;
use sigma_stats::spo2::{mask_comparison, subject_spo2};

use crate::cli::root_commands::Spo2Args;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::take_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sigma spo2`.
///
/// With `--subject` prints that subject's days and both tests, otherwise the
/// per-subject mask means and the pooled test.
pub fn handle(args: &Spo2Args, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = &ctx.config.analysis;

    if let Some(subject) = args.subject {
        let report = subject_spo2(&ctx.store, SubjectId::new(subject)?, analysis)?;
        return match flags.format {
            OutputFormat::Table => {
                output(&take_limit(report.days, flags.limit), flags.format)?;
                println!("\n{}", report.hands.conclusion);
                println!("{}", report.mask.conclusion);
                Ok(())
            }
            OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
        };
    }

    let comparison = mask_comparison(&ctx.store, analysis)?;
    match flags.format {
        OutputFormat::Table => {
            output(&comparison.subjects, flags.format)?;
            println!("\n{}", comparison.pooled.conclusion);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&comparison, flags.format),
    }
}
