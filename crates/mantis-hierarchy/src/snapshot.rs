//! The in-memory copy of all six collections.
//!
//! A [`Snapshot`] is immutable once built. Id lookups go through a per-level
//! index built at construction; child lists are filtered and sorted on every
//! call so no ordering is ever cached.

use std::collections::HashMap;

use mantis_core::entities::{Area, Component, Equipment, HierarchyEntity, Line, SparePart, System};
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use serde::Serialize;

use crate::collation::compare_names;
use crate::error::HierarchyError;
use crate::path::{ChainSegment, HierarchyPath};

/// A single entity as seen by list and tree views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: EntityKind,
    pub id: EntityId,
    pub name: String,
    /// Display text; equipment appends its tag.
    pub label: String,
    pub parent_id: Option<EntityId>,
}

impl Node {
    fn of<T: HierarchyEntity>(row: &T) -> Self {
        Self {
            kind: T::KIND,
            id: row.id(),
            name: row.name().to_string(),
            label: row.label(),
            parent_id: row.parent_id(),
        }
    }
}

/// A node of the global tree view with its sorted children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub node: Node,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// A row whose parent id points at nothing in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    pub kind: EntityKind,
    pub id: EntityId,
    pub parent_id: EntityId,
}

/// Raw collections as fetched, before indexing.
#[derive(Debug, Clone, Default)]
pub struct SnapshotParts {
    pub areas: Vec<Area>,
    pub lines: Vec<Line>,
    pub equipments: Vec<Equipment>,
    pub systems: Vec<System>,
    pub components: Vec<Component>,
    pub spare_parts: Vec<SparePart>,
}

#[derive(Debug, Clone)]
struct Level<T> {
    rows: Vec<T>,
    by_id: HashMap<EntityId, usize>,
}

impl<T: HierarchyEntity> Level<T> {
    fn new(rows: Vec<T>) -> Self {
        let mut by_id = HashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            // Ids are trusted unique; on a duplicate the first row wins.
            by_id.entry(row.id()).or_insert(idx);
        }
        Self { rows, by_id }
    }

    fn get(&self, id: EntityId) -> Option<&T> {
        self.by_id.get(&id).map(|&idx| &self.rows[idx])
    }

    fn node(&self, id: EntityId) -> Option<Node> {
        self.get(id).map(Node::of)
    }

    fn all(&self) -> Vec<Node> {
        self.rows.iter().map(Node::of).collect()
    }

    fn children(&self, parent: EntityId) -> Vec<Node> {
        self.rows
            .iter()
            .filter(|row| row.parent_id() == Some(parent))
            .map(Node::of)
            .collect()
    }

    fn dangling<P: HierarchyEntity>(&self, parents: &Level<P>) -> impl Iterator<Item = DanglingRef> {
        self.rows.iter().filter_map(|row| {
            let parent_id = row.parent_id()?;
            parents.get(parent_id).is_none().then(|| DanglingRef {
                kind: T::KIND,
                id: row.id(),
                parent_id,
            })
        })
    }
}

/// Immutable, indexed copy of the asset hierarchy.
#[derive(Debug, Clone)]
pub struct Snapshot {
    areas: Level<Area>,
    lines: Level<Line>,
    equipments: Level<Equipment>,
    systems: Level<System>,
    components: Level<Component>,
    spare_parts: Level<SparePart>,
}

impl Snapshot {
    #[must_use]
    pub fn from_parts(parts: SnapshotParts) -> Self {
        Self {
            areas: Level::new(parts.areas),
            lines: Level::new(parts.lines),
            equipments: Level::new(parts.equipments),
            systems: Level::new(parts.systems),
            components: Level::new(parts.components),
            spare_parts: Level::new(parts.spare_parts),
        }
    }

    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas.rows
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines.rows
    }

    #[must_use]
    pub fn equipments(&self) -> &[Equipment] {
        &self.equipments.rows
    }

    #[must_use]
    pub fn systems(&self) -> &[System] {
        &self.systems.rows
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components.rows
    }

    #[must_use]
    pub fn spare_parts(&self) -> &[SparePart] {
        &self.spare_parts.rows
    }

    /// Row count for `kind`.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Area => self.areas.rows.len(),
            EntityKind::Line => self.lines.rows.len(),
            EntityKind::Equipment => self.equipments.rows.len(),
            EntityKind::System => self.systems.rows.len(),
            EntityKind::Component => self.components.rows.len(),
            EntityKind::SparePart => self.spare_parts.rows.len(),
        }
    }

    /// Look up one entity.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::NotFound`] when `id` is not in the `kind`
    /// collection.
    pub fn node(&self, kind: EntityKind, id: EntityId) -> Result<Node, HierarchyError> {
        let found = match kind {
            EntityKind::Area => self.areas.node(id),
            EntityKind::Line => self.lines.node(id),
            EntityKind::Equipment => self.equipments.node(id),
            EntityKind::System => self.systems.node(id),
            EntityKind::Component => self.components.node(id),
            EntityKind::SparePart => self.spare_parts.node(id),
        };
        found.ok_or(HierarchyError::NotFound { kind, id })
    }

    #[must_use]
    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        self.node(kind, id).is_ok()
    }

    /// Immediate children of `parent` in the `kind` collection, sorted by name.
    ///
    /// `kind` names the children's level: `children_of(Line, Some(area))`
    /// lists the lines of an area. Areas have no parent, so
    /// `children_of(Area, _)` is the sorted root list. For every other level
    /// an unset or unknown parent yields an empty list.
    #[must_use]
    pub fn children_of(&self, kind: EntityKind, parent: Option<EntityId>) -> Vec<Node> {
        let mut nodes = match (kind, parent) {
            (EntityKind::Area, _) => self.areas.all(),
            (_, None) => Vec::new(),
            (EntityKind::Line, Some(p)) => self.lines.children(p),
            (EntityKind::Equipment, Some(p)) => self.equipments.children(p),
            (EntityKind::System, Some(p)) => self.systems.children(p),
            (EntityKind::Component, Some(p)) => self.components.children(p),
            (EntityKind::SparePart, Some(p)) => self.spare_parts.children(p),
        };
        nodes.sort_by(|a, b| compare_names(&a.name, &b.name));
        nodes
    }

    /// Walk parent links from `(kind, id)` up to the root.
    ///
    /// Returns one segment per level from `Area` down to `kind`. If a lookup
    /// misses, that segment keeps the id being looked up with no name, and
    /// every level above it stays blank.
    #[must_use]
    pub fn ancestor_chain(&self, kind: EntityKind, id: EntityId) -> Vec<ChainSegment> {
        let mut segments: Vec<ChainSegment> = EntityKind::ALL[..=kind.depth()]
            .iter()
            .map(|k| ChainSegment::blank(*k))
            .collect();

        let mut cursor = Some((kind, id));
        while let Some((level, level_id)) = cursor {
            let segment = &mut segments[level.depth()];
            segment.id = Some(level_id);
            match self.node(level, level_id) {
                Ok(node) => {
                    segment.name = Some(node.name);
                    cursor = level.parent().zip(node.parent_id);
                }
                Err(error) => {
                    tracing::debug!(%error, "ancestor chain stopped");
                    cursor = None;
                }
            }
        }
        segments
    }

    /// The five-slot path for a selection.
    ///
    /// Only levels that resolve in the snapshot are filled. A spare part
    /// selects its component's path; an unknown id gives an empty path.
    #[must_use]
    pub fn select_path(&self, kind: EntityKind, id: EntityId) -> HierarchyPath {
        let (kind, id) = if kind == EntityKind::SparePart {
            match self.spare_parts.get(id) {
                Some(part) => (EntityKind::Component, part.component_id),
                None => return HierarchyPath::default(),
            }
        } else {
            (kind, id)
        };

        let mut path = HierarchyPath::default();
        for segment in self.ancestor_chain(kind, id) {
            if segment.is_resolved()
                && let Some(slot) = path.slot_mut(segment.kind)
            {
                *slot = segment.id;
            }
        }
        path
    }

    /// The whole hierarchy as a sorted tree, areas at the top and spare parts
    /// as leaves.
    #[must_use]
    pub fn tree(&self) -> Vec<TreeNode> {
        self.subtree(EntityKind::Area, None)
    }

    fn subtree(&self, kind: EntityKind, parent: Option<EntityId>) -> Vec<TreeNode> {
        self.children_of(kind, parent)
            .into_iter()
            .map(|node| {
                let children = kind
                    .child()
                    .map(|child| self.subtree(child, Some(node.id)))
                    .unwrap_or_default();
                TreeNode { node, children }
            })
            .collect()
    }

    /// Rows whose parent id is not present in the parent collection.
    ///
    /// A well-formed snapshot has none; the server cascades deletes, so any
    /// hit here means the collections were fetched mid-mutation.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingRef> {
        self.lines
            .dangling(&self.areas)
            .chain(self.equipments.dangling(&self.lines))
            .chain(self.systems.dangling(&self.equipments))
            .chain(self.components.dangling(&self.systems))
            .chain(self.spare_parts.dangling(&self.components))
            .collect()
    }
}
