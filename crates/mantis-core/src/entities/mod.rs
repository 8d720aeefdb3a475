//! Entity structs for the six hierarchy levels.
//!
//! Each struct mirrors the JSON row served by the matching collection endpoint
//! (see [`EntityKind::endpoint`]). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema`; ids and foreign keys are [`EntityId`]s so
//! numeric-string payloads normalize on the way in.

mod area;
mod component;
mod equipment;
mod line;
mod spare_part;
mod system;

pub use area::Area;
pub use component::Component;
pub use equipment::Equipment;
pub use line::Line;
pub use spare_part::SparePart;
pub use system::System;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// Uniform view over the six entity structs: identity, display name, and the
/// foreign key pointing one level up.
pub trait HierarchyEntity {
    const KIND: EntityKind;

    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    /// `None` only for [`Area`].
    fn parent_id(&self) -> Option<EntityId>;

    /// Text shown in lists and trees.
    fn label(&self) -> String {
        self.name().to_string()
    }
}

impl HierarchyEntity for Area {
    const KIND: EntityKind = EntityKind::Area;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        None
    }
}

impl HierarchyEntity for Line {
    const KIND: EntityKind = EntityKind::Line;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.area_id)
    }
}

impl HierarchyEntity for Equipment {
    const KIND: EntityKind = EntityKind::Equipment;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.line_id)
    }

    fn label(&self) -> String {
        if self.tag.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.tag)
        }
    }
}

impl HierarchyEntity for System {
    const KIND: EntityKind = EntityKind::System;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.equipment_id)
    }
}

impl HierarchyEntity for Component {
    const KIND: EntityKind = EntityKind::Component;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.system_id)
    }
}

impl HierarchyEntity for SparePart {
    const KIND: EntityKind = EntityKind::SparePart;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.component_id)
    }
}

/// A single row of any kind, as returned by create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "entity", rename_all = "snake_case")]
pub enum EntityRecord {
    Area(Area),
    Line(Line),
    Equipment(Equipment),
    System(System),
    Component(Component),
    SparePart(SparePart),
}

impl EntityRecord {
    /// Decode a JSON row whose kind is known from the endpoint it came from.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the row does not match the
    /// kind's field set.
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self, CoreError> {
        let decoded = match kind {
            EntityKind::Area => serde_json::from_value(value).map(Self::Area),
            EntityKind::Line => serde_json::from_value(value).map(Self::Line),
            EntityKind::Equipment => serde_json::from_value(value).map(Self::Equipment),
            EntityKind::System => serde_json::from_value(value).map(Self::System),
            EntityKind::Component => serde_json::from_value(value).map(Self::Component),
            EntityKind::SparePart => serde_json::from_value(value).map(Self::SparePart),
        };
        decoded.map_err(|e| CoreError::Validation(format!("malformed {kind} payload: {e}")))
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Area(_) => EntityKind::Area,
            Self::Line(_) => EntityKind::Line,
            Self::Equipment(_) => EntityKind::Equipment,
            Self::System(_) => EntityKind::System,
            Self::Component(_) => EntityKind::Component,
            Self::SparePart(_) => EntityKind::SparePart,
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Self::Area(e) => e.id(),
            Self::Line(e) => e.id(),
            Self::Equipment(e) => e.id(),
            Self::System(e) => e.id(),
            Self::Component(e) => e.id(),
            Self::SparePart(e) => e.id(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Area(e) => e.name(),
            Self::Line(e) => e.name(),
            Self::Equipment(e) => e.name(),
            Self::System(e) => e.name(),
            Self::Component(e) => e.name(),
            Self::SparePart(e) => e.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn equipment_label_includes_tag() {
        let eq: Equipment = serde_json::from_value(json!({
            "id": 100, "name": "Press", "tag": "EQ-1", "line_id": 10
        }))
        .unwrap();
        assert_eq!(eq.label(), "Press (EQ-1)");
        assert_eq!(eq.parent_id(), Some(EntityId::new(10).unwrap()));
    }

    #[test]
    fn blank_tag_is_left_out_of_label() {
        let eq: Equipment = serde_json::from_value(json!({
            "id": 100, "name": "Press", "tag": "  ", "line_id": 10
        }))
        .unwrap();
        assert_eq!(eq.label(), "Press");
    }

    #[test]
    fn record_decodes_by_kind() {
        let record = EntityRecord::from_json(
            EntityKind::Line,
            json!({"id": "10", "name": "L", "description": null, "area_id": 1}),
        )
        .unwrap();
        assert_eq!(record.kind(), EntityKind::Line);
        assert_eq!(record.id().get(), 10);
        assert_eq!(record.name(), "L");
    }

    #[test]
    fn record_rejects_row_of_wrong_kind() {
        let err = EntityRecord::from_json(
            EntityKind::Equipment,
            json!({"id": 10, "name": "L", "area_id": 1}),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn spare_part_null_quantity_reads_as_zero() {
        let part: SparePart = serde_json::from_value(json!({
            "id": 5, "name": "Bearing", "code": null, "brand": "SKF",
            "quantity": null, "component_id": 3
        }))
        .unwrap();
        assert_eq!(part.quantity, 0);

        let missing: SparePart = serde_json::from_value(json!({
            "id": 6, "name": "Seal", "component_id": 3
        }))
        .unwrap();
        assert_eq!(missing.quantity, 0);
    }

    #[test]
    fn dangling_null_foreign_key_is_rejected() {
        let result = serde_json::from_value::<System>(json!({
            "id": 1, "name": "Hydraulics", "equipment_id": null
        }));
        assert!(result.is_err());
    }
}
