//! Hierarchy paths and ancestor chains.
//!
//! A [`HierarchyPath`] is the five selectable slots (area through component)
//! that notice forms, tree pickers and work-order filters carry around.
//! A [`ChainSegment`] list is the root-first walk produced by
//! [`Snapshot::ancestor_chain`](crate::Snapshot::ancestor_chain).

use std::fmt;

use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;

/// Kinds that occupy a slot in a [`HierarchyPath`], root first.
pub const PATH_KINDS: [EntityKind; 5] = [
    EntityKind::Area,
    EntityKind::Line,
    EntityKind::Equipment,
    EntityKind::System,
    EntityKind::Component,
];

/// One level of an ancestor chain.
///
/// `id` is set for every level the walk reached; `name` only for levels that
/// resolved in the snapshot. A segment with an id but no name is where
/// resolution stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSegment {
    pub kind: EntityKind,
    pub id: Option<EntityId>,
    pub name: Option<String>,
}

impl ChainSegment {
    pub(crate) const fn blank(kind: EntityKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.name.is_some()
    }

    /// The name, or `placeholder` for an unresolved segment.
    #[must_use]
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(placeholder)
    }
}

/// The selected id at each selectable level. Unset levels are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HierarchyPath {
    pub area_id: Option<EntityId>,
    pub line_id: Option<EntityId>,
    pub equipment_id: Option<EntityId>,
    pub system_id: Option<EntityId>,
    pub component_id: Option<EntityId>,
}

impl HierarchyPath {
    /// The slot for `kind`. Spare parts have no slot.
    #[must_use]
    pub const fn get(&self, kind: EntityKind) -> Option<EntityId> {
        match kind {
            EntityKind::Area => self.area_id,
            EntityKind::Line => self.line_id,
            EntityKind::Equipment => self.equipment_id,
            EntityKind::System => self.system_id,
            EntityKind::Component => self.component_id,
            EntityKind::SparePart => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, kind: EntityKind) -> Option<&mut Option<EntityId>> {
        match kind {
            EntityKind::Area => Some(&mut self.area_id),
            EntityKind::Line => Some(&mut self.line_id),
            EntityKind::Equipment => Some(&mut self.equipment_id),
            EntityKind::System => Some(&mut self.system_id),
            EntityKind::Component => Some(&mut self.component_id),
            EntityKind::SparePart => None,
        }
    }

    /// Unset `kind` and every level below it.
    pub fn clear_from(&mut self, kind: EntityKind) {
        for level in PATH_KINDS.into_iter().filter(|k| k.depth() >= kind.depth()) {
            if let Some(slot) = self.slot_mut(level) {
                *slot = None;
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deepest().is_none()
    }

    /// The deepest set level and its id.
    #[must_use]
    pub fn deepest(&self) -> Option<(EntityKind, EntityId)> {
        PATH_KINDS
            .into_iter()
            .rev()
            .find_map(|kind| self.get(kind).map(|id| (kind, id)))
    }

    /// Resolve each slot's name against `snapshot`, using `placeholder` for
    /// unset levels and ids the snapshot does not know.
    #[must_use]
    pub fn labels(&self, snapshot: &Snapshot, placeholder: &str) -> PathLabels {
        let segments = PATH_KINDS
            .into_iter()
            .map(|kind| {
                let name = self
                    .get(kind)
                    .and_then(|id| snapshot.node(kind, id).ok())
                    .map_or_else(|| placeholder.to_string(), |node| node.name);
                (kind, name)
            })
            .collect();
        PathLabels { segments }
    }
}

/// Display names for each slot of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLabels {
    pub segments: Vec<(EntityKind, String)>,
}

impl fmt::Display for PathLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, name)) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{kind}: {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(raw: u64) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    #[test]
    fn clear_from_drops_level_and_below() {
        let mut path = HierarchyPath {
            area_id: Some(id(1)),
            line_id: Some(id(10)),
            equipment_id: Some(id(100)),
            system_id: Some(id(1000)),
            component_id: None,
        };
        path.clear_from(EntityKind::Equipment);
        assert_eq!(path, HierarchyPath {
            area_id: Some(id(1)),
            line_id: Some(id(10)),
            ..HierarchyPath::default()
        });
        assert_eq!(path.deepest(), Some((EntityKind::Line, id(10))));
    }

    #[test]
    fn empty_path_has_no_deepest() {
        let path = HierarchyPath::default();
        assert!(path.is_empty());
        assert_eq!(path.get(EntityKind::SparePart), None);
    }

    #[test]
    fn segment_placeholder() {
        let seg = ChainSegment::blank(EntityKind::Line);
        assert!(!seg.is_resolved());
        assert_eq!(seg.display_name("-"), "-");
    }
}
