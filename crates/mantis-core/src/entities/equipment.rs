use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A piece of equipment on a line, identified on the floor by its tag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Equipment {
    pub id: EntityId,
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form level as entered by planners (`Baja`, `Media`, `Alta`).
    #[serde(default)]
    pub criticality: Option<String>,
    pub line_id: EntityId,
}
