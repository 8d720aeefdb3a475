use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A stocked spare part for a component. Leaf of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SparePart {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// On-hand count. The API defaults this to zero; `null` is read the same way.
    #[serde(default, deserialize_with = "quantity_or_zero")]
    #[schemars(with = "i64")]
    pub quantity: i64,
    pub component_id: EntityId,
}

fn quantity_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}
