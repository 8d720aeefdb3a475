//! Schema checks for the hierarchy entities.
//!
//! Rows are decoded from the loosely-typed payloads the API serves (string ids,
//! missing optional columns), re-serialized, and validated against the
//! schemars-generated schema so the canonical form is what the schema describes.

use mantis_core::entities::{Area, Component, Equipment, Line, SparePart, System};
use schemars::schema_for;
use serde_json::json;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! normalize_and_validate {
    ($name:ident, $ty:ty, $payload:expr) => {
        #[test]
        fn $name() {
            let decoded: $ty = serde_json::from_value($payload).unwrap();

            let canonical = serde_json::to_value(&decoded).unwrap();
            let recovered: $ty = serde_json::from_value(canonical.clone()).unwrap();
            assert_eq!(recovered, decoded, "canonical form changed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let errors = validate_against_schema(&schema, &canonical);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

normalize_and_validate!(
    area_with_string_id,
    Area,
    json!({"id": "1", "name": "Molienda", "description": null})
);

normalize_and_validate!(
    line_without_description,
    Line,
    json!({"id": 10, "name": "Linea 1", "area_id": "1"})
);

normalize_and_validate!(
    equipment_full_row,
    Equipment,
    json!({
        "id": 100, "name": "Chancadora", "tag": "CH-01",
        "description": "Primaria", "criticality": "Alta", "line_id": 10
    })
);

normalize_and_validate!(
    system_row,
    System,
    json!({"id": 1000, "name": "Hidraulico", "equipment_id": 100})
);

normalize_and_validate!(
    component_default_criticality,
    Component,
    json!({"id": 5, "name": "Bomba", "description": null, "system_id": 1000, "criticality": "Media"})
);

normalize_and_validate!(
    spare_part_null_columns,
    SparePart,
    json!({"id": 7, "name": "Sello", "code": null, "brand": null, "quantity": null, "component_id": "5"})
);

#[test]
fn string_and_numeric_foreign_keys_agree() {
    let a: Line = serde_json::from_value(json!({"id": 1, "name": "L", "area_id": "3"})).unwrap();
    let b: Line = serde_json::from_value(json!({"id": "1", "name": "L", "area_id": 3})).unwrap();
    assert_eq!(a, b);
}
