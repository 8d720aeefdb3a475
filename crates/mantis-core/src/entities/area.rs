use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// Root of the hierarchy: a plant area.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Area {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
