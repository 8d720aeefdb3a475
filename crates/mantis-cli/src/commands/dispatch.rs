use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Tree => commands::tree::handle(ctx, flags).await,
        Commands::Children(args) => commands::children::handle(&args, ctx, flags).await,
        Commands::Chain(args) => commands::chain::handle(&args, ctx, flags).await,
        Commands::Path(args) => commands::path::handle(&args, ctx, flags).await,
        Commands::Create(args) => commands::mutate::create(&args, ctx, flags).await,
        Commands::Update(args) => commands::mutate::update(&args, ctx, flags).await,
        Commands::Delete(args) => commands::mutate::delete(&args, ctx, flags).await,
    }
}
