//! Request bodies for create and update calls.
//!
//! The API takes the entity's own field set, with the server assigning `id`.
//! [`EntityDraft`] carries every field any level can have; [`EntityDraft::to_body`]
//! checks it against the target kind and emits the JSON object, naming the
//! parent link after the kind's foreign-key column.

use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// Whether the body is for a `POST` (all required fields) or a `PUT`
/// (partial, blank strings cleared to `null`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub criticality: Option<String>,
    pub code: Option<String>,
    pub brand: Option<String>,
    pub quantity: Option<i64>,
    /// Serialized under the kind's parent field (`area_id`, `line_id`, ...).
    pub parent_id: Option<EntityId>,
}

impl EntityDraft {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn under(mut self, parent_id: EntityId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Build the JSON body for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a field does not exist on `kind`,
    /// a required field is missing on create, the quantity is negative, or an
    /// update carries no fields at all.
    pub fn to_body(&self, kind: EntityKind, mode: DraftMode) -> Result<Value, CoreError> {
        let mut body = Map::new();

        let text_fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("tag", &self.tag),
            ("criticality", &self.criticality),
            ("code", &self.code),
            ("brand", &self.brand),
        ];
        for (field, value) in text_fields {
            let Some(value) = value else { continue };
            ensure_field(kind, field)?;
            body.insert(field.to_string(), text_value(value, mode));
        }

        if let Some(quantity) = self.quantity {
            ensure_field(kind, "quantity")?;
            if quantity < 0 {
                return Err(CoreError::Validation(format!(
                    "quantity must not be negative (got {quantity})"
                )));
            }
            body.insert("quantity".to_string(), Value::from(quantity));
        }

        if let Some(parent_id) = self.parent_id {
            let field = kind
                .parent_field()
                .ok_or_else(|| CoreError::Validation(format!("{kind} has no parent")))?;
            body.insert(field.to_string(), Value::from(parent_id.get()));
        }

        match mode {
            DraftMode::Create => {
                for field in kind.spec().required_fields {
                    let present = body
                        .get(*field)
                        .is_some_and(|v| v.as_str().is_none_or(|s| !s.trim().is_empty()));
                    if !present {
                        return Err(CoreError::Validation(format!("Missing {field}")));
                    }
                }
            }
            DraftMode::Update => {
                if body.is_empty() {
                    return Err(CoreError::Validation(format!(
                        "nothing to update on {kind}"
                    )));
                }
                if body.get("name").is_some_and(Value::is_null) {
                    return Err(CoreError::Validation("name cannot be blank".into()));
                }
            }
        }

        Ok(Value::Object(body))
    }
}

/// Fields each kind accepts besides its parent link.
fn allowed_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Area | EntityKind::Line => &["name", "description"],
        EntityKind::Equipment => &["name", "tag", "description", "criticality"],
        EntityKind::System => &["name"],
        EntityKind::Component => &["name", "description", "criticality"],
        EntityKind::SparePart => &["name", "code", "brand", "quantity"],
    }
}

fn ensure_field(kind: EntityKind, field: &str) -> Result<(), CoreError> {
    if allowed_fields(kind).contains(&field) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("{kind} has no field '{field}'")))
    }
}

fn text_value(value: &str, mode: DraftMode) -> Value {
    let trimmed = value.trim();
    if mode == DraftMode::Update && trimmed.is_empty() {
        Value::Null
    } else {
        Value::String(trimmed.to_string())
    }
}
