use sigma_stats::spots::spots_report;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `sigma spots`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = spots_report(&ctx.store, &ctx.config.analysis)?;
    match flags.format {
        OutputFormat::Table => {
            output(&report.subjects, flags.format)?;
            println!("\n{}", report.paired.conclusion);
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}
