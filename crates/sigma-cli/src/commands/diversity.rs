use sigma_stats::diversity::diversity_table;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DiversityArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sigma diversity`.
pub fn handle(args: &DiversityArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = diversity_table(&ctx.store, args.index)?;
    tracing::debug!(index = args.index.display_name(), subjects = rows.len(), "diversity");
    output(&rows, flags.format)
}
