use mantis_core::entities::EntityRecord;
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use mantis_hierarchy::{ChainSegment, HierarchyPath, Node, SelectionState, TreeNode};
use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;
pub mod tree;

/// Human-readable rendering for `--format text`.
pub trait TextView {
    /// `placeholder` stands in for unresolved hierarchy names.
    fn to_text(&self, placeholder: &str) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TextView + ?Sized>(
    value: &T,
    format: OutputFormat,
    placeholder: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Text => Ok(value.to_text(placeholder)),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView + ?Sized>(
    value: &T,
    format: OutputFormat,
    placeholder: &str,
) -> anyhow::Result<()> {
    let rendered = render(value, format, placeholder)?;
    println!("{rendered}");
    Ok(())
}

impl TextView for [Node] {
    fn to_text(&self, _placeholder: &str) -> String {
        if self.is_empty() {
            return String::from("(no rows)");
        }
        let rows = self
            .iter()
            .map(|node| vec![node.id.to_string(), node.kind.to_string(), node.label.clone()])
            .collect::<Vec<_>>();
        table::render_table(&["id", "kind", "name"], &rows, table::TableOptions::from_env())
    }
}

impl TextView for [TreeNode] {
    fn to_text(&self, _placeholder: &str) -> String {
        tree::render_tree(self)
    }
}

impl TextView for [ChainSegment] {
    fn to_text(&self, placeholder: &str) -> String {
        self.iter()
            .map(|segment| format!("{}: {}", segment.kind, segment.display_name(placeholder)))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// `mnt path` result: the resolved path plus the picker state it implies.
#[derive(Debug, Serialize)]
pub struct PathView {
    pub state: SelectionState,
    pub path: HierarchyPath,
    pub display: String,
    /// Choices for the level below the deepest resolved one.
    pub next: Vec<Node>,
}

impl TextView for PathView {
    fn to_text(&self, placeholder: &str) -> String {
        let mut out = format!("{}\nstate: {}", self.display, self.state);
        if !self.next.is_empty() {
            out.push_str("\n\n");
            out.push_str(&self.next.to_text(placeholder));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

/// Outcome of a create/update/delete.
#[derive(Debug, Serialize)]
pub struct MutationView {
    pub action: Action,
    pub kind: EntityKind,
    pub id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<EntityRecord>,
}

impl TextView for MutationView {
    fn to_text(&self, _placeholder: &str) -> String {
        let verb = match self.action {
            Action::Created => "created",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        };
        match &self.record {
            Some(record) => format!("{verb} {} {} ({})", self.kind, self.id, record.name()),
            None => format!("{verb} {} {}", self.kind, self.id),
        }
    }
}
