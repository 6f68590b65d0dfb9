use sigma_core::Period;
use sigma_stats::species::{
    compare_composition, composition, rank_table, species_counts, top_species,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{RanksArgs, SpeciesArgs};
use crate::commands::shared::limit::{effective_limit, take_limit};
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_RANKS: u32 = 20;

/// Handle `sigma species`.
///
/// With `--period` the shares of that period are printed; otherwise both
/// periods are lined up per species.
pub fn handle_species(
    args: &SpeciesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let fallback = u32::try_from(ctx.config.analysis.top_species).unwrap_or(u32::MAX);
    let top = effective_limit(args.top, None, fallback) as usize;

    if let Some(period) = args.period {
        let shares = top_species(&composition(&ctx.store, period, args.subject)?, top);
        tracing::debug!(label = %args.subject.label(period), species = shares.len(), "composition");
        return output(&take_limit(shares, flags.limit), flags.format);
    }

    let baseline = top_species(&composition(&ctx.store, Period::Baseline, args.subject)?, top);
    let intervention =
        top_species(&composition(&ctx.store, Period::Intervention, args.subject)?, top);
    let rows = compare_composition(&baseline, &intervention);
    output(&take_limit(rows, flags.limit), flags.format)
}

/// Handle `sigma ranks`.
pub fn handle_ranks(args: &RanksArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = effective_limit(args.n, flags.limit, DEFAULT_RANKS) as usize;
    let baseline = species_counts(&ctx.store.barcode_table(args.subject, Period::Baseline, None)?)?;
    let intervention =
        species_counts(&ctx.store.barcode_table(args.subject, Period::Intervention, None)?)?;
    let rows = rank_table(&baseline, &intervention, n)?;
    output(&rows, flags.format)
}
