//! Cross-cutting error types for Mantis.
//!
//! Transport errors live in `mantis-hierarchy`; this module only covers what
//! can go wrong with the domain types themselves.

use thiserror::Error;

use crate::ids::EntityId;
use crate::kind::EntityKind;

/// Errors that can be raised by any Mantis crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Caller-supplied data is malformed (id, kind, draft fields).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
