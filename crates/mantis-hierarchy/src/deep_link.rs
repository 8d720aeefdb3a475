//! Create-form deep links.
//!
//! Screens open the notice form prefilled from a query string such as
//! `create=true&type=Equipment&id=100`. The link names one node; the form
//! resolves it to a [`HierarchyPath`] through the loaded snapshot.

use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use serde::Serialize;

use crate::error::HierarchyError;
use crate::path::HierarchyPath;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub kind: EntityKind,
    pub id: EntityId,
    /// `create=true` was present.
    pub create: bool,
}

impl DeepLink {
    /// Parse a query string. A leading `?` is allowed; unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::Validation`] when `type` or `id` is missing
    /// or malformed, or when a value is not valid percent-encoded UTF-8.
    pub fn parse(query: &str) -> Result<Self, HierarchyError> {
        let mut kind = None;
        let mut id = None;
        let mut create = false;

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(value)?;
            match key {
                "type" => kind = Some(value.parse::<EntityKind>()?),
                "id" => id = Some(value.parse::<EntityId>()?),
                "create" => create = value.eq_ignore_ascii_case("true") || value == "1",
                _ => {}
            }
        }

        let kind = kind.ok_or_else(|| HierarchyError::Validation("deep link is missing 'type'".into()))?;
        let id = id.ok_or_else(|| HierarchyError::Validation("deep link is missing 'id'".into()))?;
        Ok(Self { kind, id, create })
    }

    /// Render back to a query string.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = format!("type={}&id={}", urlencoding::encode(self.kind.label()), self.id);
        if self.create {
            query.insert_str(0, "create=true&");
        }
        query
    }

    /// The path the form should prefill. Levels the snapshot cannot resolve
    /// stay unset.
    #[must_use]
    pub fn resolve(&self, snapshot: &Snapshot) -> HierarchyPath {
        snapshot.select_path(self.kind, self.id)
    }
}

fn decode(value: &str) -> Result<String, HierarchyError> {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| HierarchyError::Validation(format!("bad deep link encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_create_link() {
        let link = DeepLink::parse("create=true&type=Equipment&id=100").unwrap();
        assert_eq!(link, DeepLink {
            kind: EntityKind::Equipment,
            id: EntityId::new(100).unwrap(),
            create: true,
        });
        assert_eq!(link.to_query(), "create=true&type=Equipment&id=100");
    }

    #[rstest]
    #[case("?type=spare-part&id=7", EntityKind::SparePart)]
    #[case("type=SparePart&id=%207", EntityKind::SparePart)]
    #[case("id=7&type=line&utm=x", EntityKind::Line)]
    fn tolerant_forms(#[case] query: &str, #[case] kind: EntityKind) {
        let link = DeepLink::parse(query).unwrap();
        assert_eq!(link.kind, kind);
        assert_eq!(link.id.get(), 7);
        assert!(!link.create);
    }

    #[rstest]
    #[case("type=Equipment")]
    #[case("id=100")]
    #[case("type=Plant&id=1")]
    #[case("type=Area&id=abc")]
    #[case("type=Area&id=0")]
    #[case("type=Area&id=%FF")]
    fn rejects_bad_links(#[case] query: &str) {
        assert!(matches!(
            DeepLink::parse(query),
            Err(HierarchyError::Validation(_))
        ));
    }

    #[test]
    fn resolves_against_snapshot() {
        use mantis_core::entities::{Area, Line};

        use crate::snapshot::SnapshotParts;

        let one = EntityId::new(1).unwrap();
        let ten = EntityId::new(10).unwrap();
        let snapshot = Snapshot::from_parts(SnapshotParts {
            areas: vec![Area { id: one, name: "A".into(), description: None }],
            lines: vec![Line { id: ten, name: "L".into(), description: None, area_id: one }],
            ..SnapshotParts::default()
        });
        let path = DeepLink::parse("type=Line&id=10").unwrap().resolve(&snapshot);
        assert_eq!(path, HierarchyPath {
            area_id: Some(one),
            line_id: Some(ten),
            ..HierarchyPath::default()
        });
    }
}
