use clap::{Args, Subcommand};
use mantis_core::draft::EntityDraft;
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the whole hierarchy as a tree.
    Tree,
    /// List the children of a node, or all areas.
    Children(ChildrenArgs),
    /// Show the ancestor chain of a node, root first.
    Chain(NodeArgs),
    /// Resolve the selection path for a node or a deep link.
    Path(PathArgs),
    /// Create a row.
    Create(CreateArgs),
    /// Update fields on a row.
    Update(UpdateArgs),
    /// Delete a row and, on the server, its descendants.
    Delete(NodeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ChildrenArgs {
    /// Level to list (area, line, equipment, system, component, spare-part).
    pub kind: EntityKind,
    /// Parent id. Ignored for areas.
    #[arg(long)]
    pub parent: Option<EntityId>,
}

#[derive(Clone, Debug, Args)]
pub struct NodeArgs {
    pub kind: EntityKind,
    pub id: EntityId,
}

#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["kind", "link"]),
))]
pub struct PathArgs {
    #[arg(requires = "id")]
    pub kind: Option<EntityKind>,
    pub id: Option<EntityId>,
    /// Deep-link query string, e.g. `create=true&type=Equipment&id=100`.
    #[arg(long, conflicts_with_all = ["kind", "id"])]
    pub link: Option<String>,
}

/// Every field any level can carry. Fields foreign to the target kind are
/// rejected before a request is sent.
#[derive(Clone, Debug, Default, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub criticality: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: Option<i64>,
    /// Parent id, sent under the level's foreign-key field.
    #[arg(long)]
    pub parent: Option<EntityId>,
}

impl DraftArgs {
    #[must_use]
    pub fn to_draft(&self) -> EntityDraft {
        EntityDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            tag: self.tag.clone(),
            criticality: self.criticality.clone(),
            code: self.code.clone(),
            brand: self.brand.clone(),
            quantity: self.quantity,
            parent_id: self.parent,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    pub kind: EntityKind,
    #[command(flatten)]
    pub fields: DraftArgs,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub kind: EntityKind,
    pub id: EntityId,
    #[command(flatten)]
    pub fields: DraftArgs,
}
