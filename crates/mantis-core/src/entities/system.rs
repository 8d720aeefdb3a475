use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct System {
    pub id: EntityId,
    pub name: String,
    pub equipment_id: EntityId,
}
