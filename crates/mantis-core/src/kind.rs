//! The six levels of the asset hierarchy.
//!
//! ```text
//! area → line → equipment → system → component → spare_part
//! ```
//!
//! Per-level behavior (endpoint, parent foreign key, create requirements) is
//! looked up in the static [`KindSpec`] table rather than matched on strings.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Static per-kind facts: where the collection lives and how it links upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSpec {
    /// Human label, also the spelling used in deep links (`type=Equipment`).
    pub label: &'static str,
    /// Collection endpoint relative to the API base URL.
    pub endpoint: &'static str,
    /// Foreign-key field naming the parent, `None` for the root level.
    pub parent_field: Option<&'static str>,
    /// Fields the server insists on when creating a row.
    pub required_fields: &'static [&'static str],
}

static SPECS: [KindSpec; 6] = [
    KindSpec {
        label: "Area",
        endpoint: "/api/areas",
        parent_field: None,
        required_fields: &["name"],
    },
    KindSpec {
        label: "Line",
        endpoint: "/api/lines",
        parent_field: Some("area_id"),
        required_fields: &["name", "area_id"],
    },
    KindSpec {
        label: "Equipment",
        endpoint: "/api/equipments",
        parent_field: Some("line_id"),
        required_fields: &["name", "tag", "line_id"],
    },
    KindSpec {
        label: "System",
        endpoint: "/api/systems",
        parent_field: Some("equipment_id"),
        required_fields: &["name", "equipment_id"],
    },
    KindSpec {
        label: "Component",
        endpoint: "/api/components",
        parent_field: Some("system_id"),
        required_fields: &["name", "system_id"],
    },
    KindSpec {
        label: "SparePart",
        endpoint: "/api/spare-parts",
        parent_field: Some("component_id"),
        required_fields: &["name", "component_id"],
    },
];

/// A level of the asset hierarchy, root first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Area,
    Line,
    Equipment,
    System,
    Component,
    SparePart,
}

impl EntityKind {
    /// All kinds in root-to-leaf order.
    pub const ALL: [Self; 6] = [
        Self::Area,
        Self::Line,
        Self::Equipment,
        Self::System,
        Self::Component,
        Self::SparePart,
    ];

    /// Zero-based level, `Area` is 0.
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::Area => 0,
            Self::Line => 1,
            Self::Equipment => 2,
            Self::System => 3,
            Self::Component => 4,
            Self::SparePart => 5,
        }
    }

    #[must_use]
    pub fn spec(self) -> &'static KindSpec {
        &SPECS[self.depth()]
    }

    #[must_use]
    pub fn endpoint(self) -> &'static str {
        self.spec().endpoint
    }

    #[must_use]
    pub fn parent_field(self) -> Option<&'static str> {
        self.spec().parent_field
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// The level directly above, `None` for `Area`.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Area => None,
            Self::Line => Some(Self::Area),
            Self::Equipment => Some(Self::Line),
            Self::System => Some(Self::Equipment),
            Self::Component => Some(Self::System),
            Self::SparePart => Some(Self::Component),
        }
    }

    /// The level directly below, `None` for `SparePart`.
    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Area => Some(Self::Line),
            Self::Line => Some(Self::Equipment),
            Self::Equipment => Some(Self::System),
            Self::System => Some(Self::Component),
            Self::Component => Some(Self::SparePart),
            Self::SparePart => None,
        }
    }

    /// Return the string representation used in serialized payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Line => "line",
            Self::Equipment => "equipment",
            Self::System => "system",
            Self::Component => "component",
            Self::SparePart => "spare_part",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    /// Case-insensitive; `-` and `_` are ignored so `SparePart`,
    /// `spare-part` and `spare_part` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CoreError::validation(format!("unknown entity kind '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parent_and_child_are_inverse() {
        for kind in EntityKind::ALL {
            if let Some(child) = kind.child() {
                assert_eq!(child.parent(), Some(kind));
                assert_eq!(child.depth(), kind.depth() + 1);
            }
        }
        assert_eq!(EntityKind::Area.parent(), None);
        assert_eq!(EntityKind::SparePart.child(), None);
    }

    #[test]
    fn only_root_lacks_parent_field() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.parent_field().is_none(), kind == EntityKind::Area);
        }
    }

    #[test]
    fn parent_field_is_required_on_create() {
        for kind in EntityKind::ALL {
            if let Some(field) = kind.parent_field() {
                assert!(kind.spec().required_fields.contains(&field), "{kind}");
            }
        }
    }

    #[rstest]
    #[case("Area", EntityKind::Area)]
    #[case("line", EntityKind::Line)]
    #[case("EQUIPMENT", EntityKind::Equipment)]
    #[case(" System ", EntityKind::System)]
    #[case("component", EntityKind::Component)]
    #[case("SparePart", EntityKind::SparePart)]
    #[case("spare-part", EntityKind::SparePart)]
    #[case("spare_part", EntityKind::SparePart)]
    fn parses_kind_spellings(#[case] raw: &str, #[case] expected: EntityKind) {
        assert_eq!(raw.parse::<EntityKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("plant")]
    #[case("Areas")]
    fn rejects_unknown_kinds(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<EntityKind>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn endpoints_match_api_routes() {
        assert_eq!(EntityKind::Equipment.endpoint(), "/api/equipments");
        assert_eq!(EntityKind::SparePart.endpoint(), "/api/spare-parts");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&EntityKind::SparePart).unwrap();
        assert_eq!(json, "\"spare_part\"");
    }
}
