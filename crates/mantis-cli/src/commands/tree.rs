use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mnt tree`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    output(snapshot.tree().as_slice(), flags.format, ctx.placeholder())
}
