use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Diary(args) => commands::data::handle_diary(&args, ctx, flags),
        Commands::Barcodes(args) => commands::data::handle_barcodes(&args, ctx, flags),
        Commands::Cohort(args) => commands::data::handle_cohort(&args, ctx, flags),
        Commands::Species(args) => commands::species::handle_species(&args, ctx, flags),
        Commands::Ranks(args) => commands::species::handle_ranks(&args, ctx, flags),
        Commands::Diversity(args) => commands::diversity::handle(&args, ctx, flags),
        Commands::Spo2(args) => commands::spo2::handle(&args, ctx, flags),
        Commands::Spots => commands::spots::handle(ctx, flags),
        Commands::Acnes => commands::acnes::handle(ctx, flags),
        Commands::Parse { action } => commands::parse::handle(&action, ctx, flags),
        Commands::Config => commands::config::handle(ctx, flags),
    }
}
