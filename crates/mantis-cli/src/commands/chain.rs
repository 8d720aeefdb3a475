use crate::cli::GlobalFlags;
use crate::cli::root_commands::NodeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mnt chain`.
pub async fn handle(args: &NodeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot().await?;
    let chain = snapshot.ancestor_chain(args.kind, args.id);
    if chain.last().is_some_and(|segment| !segment.is_resolved()) {
        tracing::warn!(kind = %args.kind, id = %args.id, "node is not in the hierarchy");
    }
    output(chain.as_slice(), flags.format, ctx.placeholder())
}
