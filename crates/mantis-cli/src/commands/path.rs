use anyhow::Context;
use mantis_hierarchy::{DeepLink, Selection};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::context::AppContext;
use crate::output::{PathView, output};

/// Handle `mnt path`.
pub async fn handle(args: &PathArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (kind, id) = match (&args.link, args.kind, args.id) {
        (Some(link), _, _) => {
            let link = DeepLink::parse(link).context("invalid --link")?;
            (link.kind, link.id)
        }
        (None, Some(kind), Some(id)) => (kind, id),
        _ => anyhow::bail!("pass either <kind> <id> or --link"),
    };

    let snapshot = ctx.snapshot().await?;
    snapshot.node(kind, id)?;
    let selection = Selection::from_path(snapshot.select_path(kind, id));
    let view = PathView {
        state: selection.state(),
        path: *selection.path(),
        display: selection.path().labels(&snapshot, ctx.placeholder()).to_string(),
        next: selection.options(&snapshot),
    };
    output(&view, flags.format, ctx.placeholder())
}
