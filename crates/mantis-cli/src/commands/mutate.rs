use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CreateArgs, NodeArgs, UpdateArgs};
use crate::context::AppContext;
use crate::output::{Action, MutationView, output};

/// Handle `mnt create`.
pub async fn create(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.store.create(args.kind, &args.fields.to_draft()).await?;
    let view = MutationView {
        action: Action::Created,
        kind: args.kind,
        id: record.id(),
        record: Some(record),
    };
    output(&view, flags.format, ctx.placeholder())
}

/// Handle `mnt update`.
pub async fn update(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .store
        .update(args.kind, args.id, &args.fields.to_draft())
        .await?;
    let view = MutationView {
        action: Action::Updated,
        kind: args.kind,
        id: args.id,
        record: Some(record),
    };
    output(&view, flags.format, ctx.placeholder())
}

/// Handle `mnt delete`.
pub async fn delete(args: &NodeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.delete(args.kind, args.id).await?;
    let view = MutationView {
        action: Action::Deleted,
        kind: args.kind,
        id: args.id,
        record: None,
    };
    output(&view, flags.format, ctx.placeholder())
}
