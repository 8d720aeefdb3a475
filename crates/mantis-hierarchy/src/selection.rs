//! Cascading selection over the hierarchy.
//!
//! ```text
//! none_selected → area_selected → line_selected → equipment_selected
//!               → system_selected → component_selected
//! ```
//!
//! Picking a node at level K clears K and everything deeper, stores the pick,
//! and re-derives the shallower levels from the snapshot so the path is always
//! one consistent chain. Picking a shallower node therefore drops any deeper
//! selection.

use std::fmt;

use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use serde::Serialize;

use crate::error::HierarchyError;
use crate::path::HierarchyPath;
use crate::snapshot::{Node, Snapshot};

/// Which level is the deepest current pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    NoneSelected,
    AreaSelected,
    LineSelected,
    EquipmentSelected,
    SystemSelected,
    ComponentSelected,
}

impl SelectionState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoneSelected => "none_selected",
            Self::AreaSelected => "area_selected",
            Self::LineSelected => "line_selected",
            Self::EquipmentSelected => "equipment_selected",
            Self::SystemSelected => "system_selected",
            Self::ComponentSelected => "component_selected",
        }
    }

    const fn of(kind: Option<EntityKind>) -> Self {
        match kind {
            None | Some(EntityKind::SparePart) => Self::NoneSelected,
            Some(EntityKind::Area) => Self::AreaSelected,
            Some(EntityKind::Line) => Self::LineSelected,
            Some(EntityKind::Equipment) => Self::EquipmentSelected,
            Some(EntityKind::System) => Self::SystemSelected,
            Some(EntityKind::Component) => Self::ComponentSelected,
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The state behind every selector UI: the picked path plus transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    path: HierarchyPath,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a path resolved elsewhere (e.g. a deep link prefill).
    #[must_use]
    pub const fn from_path(path: HierarchyPath) -> Self {
        Self { path }
    }

    #[must_use]
    pub const fn path(&self) -> &HierarchyPath {
        &self.path
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        SelectionState::of(self.path.deepest().map(|(kind, _)| kind))
    }

    #[must_use]
    pub const fn selected(&self, kind: EntityKind) -> Option<EntityId> {
        self.path.get(kind)
    }

    /// Pick `id` at level `kind` and return the choices for the next level.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::Validation`] for `SparePart`, which is a leaf and
    ///   not a selection level.
    /// - [`HierarchyError::NotFound`] when `id` is not in the snapshot. The
    ///   selection is left unchanged in both cases.
    pub fn select(
        &mut self,
        snapshot: &Snapshot,
        kind: EntityKind,
        id: EntityId,
    ) -> Result<Vec<Node>, HierarchyError> {
        if kind == EntityKind::SparePart {
            return Err(HierarchyError::Validation(
                "spare parts cannot be selected as a hierarchy level".into(),
            ));
        }
        snapshot.node(kind, id)?;

        let mut next = self.path;
        next.clear_from(kind);
        let resolved = snapshot.select_path(kind, id);
        for level in crate::path::PATH_KINDS
            .into_iter()
            .filter(|k| k.depth() <= kind.depth())
        {
            if let Some(slot) = next.slot_mut(level) {
                *slot = resolved.get(level);
            }
        }
        self.path = next;
        tracing::debug!(%kind, %id, state = %self.state(), "selection changed");

        Ok(self.options(snapshot))
    }

    /// Drop `kind` and every deeper pick.
    pub fn clear_from(&mut self, kind: EntityKind) {
        self.path.clear_from(kind);
    }

    pub fn clear(&mut self) {
        self.path = HierarchyPath::default();
    }

    /// Valid choices one level below the deepest pick; the area list when
    /// nothing is picked.
    #[must_use]
    pub fn options(&self, snapshot: &Snapshot) -> Vec<Node> {
        match self.path.deepest() {
            None => snapshot.children_of(EntityKind::Area, None),
            Some((kind, id)) => kind
                .child()
                .map(|child| snapshot.children_of(child, Some(id)))
                .unwrap_or_default(),
        }
    }

    /// Choices available at `kind` given the picks above it.
    #[must_use]
    pub fn options_at(&self, snapshot: &Snapshot, kind: EntityKind) -> Vec<Node> {
        match kind.parent() {
            None => snapshot.children_of(kind, None),
            Some(parent) => snapshot.children_of(kind, self.path.get(parent)),
        }
    }
}
