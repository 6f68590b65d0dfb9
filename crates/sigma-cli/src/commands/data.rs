use crate::cli::GlobalFlags;
use crate::cli::root_commands::{BarcodesArgs, CohortArgs, DiaryArgs};
use crate::context::AppContext;
use crate::output::output_dataset;

/// Handle `sigma diary`.
pub fn handle_diary(args: &DiaryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let columns = column_refs(&args.columns);
    let diary = ctx.store.diary(args.subject, columns.as_deref())?;
    show(&diary, flags)
}

/// Handle `sigma barcodes`.
pub fn handle_barcodes(
    args: &BarcodesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let columns = column_refs(&args.columns);
    let reads = ctx
        .store
        .barcode_table(args.subject, args.period, columns.as_deref())?;
    show(&reads, flags)
}

/// Handle `sigma cohort`.
pub fn handle_cohort(args: &CohortArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reads = ctx.store.all_subjects(args.period)?;
    tracing::info!(period = %args.period, rows = reads.len(), "loaded cohort");
    show(&reads, flags)
}

fn column_refs(columns: &[String]) -> Option<Vec<&str>> {
    (!columns.is_empty()).then(|| columns.iter().map(String::as_str).collect())
}

fn show(table: &sigma_data::Table, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.limit {
        Some(limit) => output_dataset(&table.slice(0..limit as usize), flags.format),
        None => output_dataset(table, flags.format),
    }
}
