use mantis_core::kind::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChildrenArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mnt children`.
pub async fn handle(args: &ChildrenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.kind != EntityKind::Area && args.parent.is_none() {
        anyhow::bail!("--parent is required when listing {} rows", args.kind);
    }
    let snapshot = ctx.snapshot().await?;
    let nodes = snapshot.children_of(args.kind, args.parent);
    output(nodes.as_slice(), flags.format, ctx.placeholder())
}
