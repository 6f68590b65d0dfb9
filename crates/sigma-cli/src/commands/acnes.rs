use sigma_stats::acnes::acnes_shares;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sigma acnes`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&acnes_shares(&ctx.store)?, flags.format)
}
