//! Hierarchy error types.

use mantis_core::errors::CoreError;
use mantis_core::ids::EntityId;
use mantis_core::kind::EntityKind;
use thiserror::Error;

/// Errors surfaced by the hierarchy store and its REST client.
///
/// `Clone` so a single load outcome can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// The request failed in transit, came back non-2xx, or the body could not
    /// be decoded.
    #[error("network error on {endpoint}: {reason}")]
    Network {
        /// Endpoint path the request was made against.
        endpoint: String,
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Server-provided message or transport error text.
        reason: String,
    },

    /// An id was referenced but is absent from the loaded snapshot.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Malformed caller input: id, kind, deep link or draft.
    #[error("validation error: {0}")]
    Validation(String),

    /// A query ran before any successful load, or after invalidation.
    #[error("hierarchy not loaded")]
    NotLoaded,
}

impl HierarchyError {
    pub(crate) fn transport(endpoint: &str, error: &reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.to_string(),
            status: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }

    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<CoreError> for HierarchyError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { kind, id } => Self::NotFound { kind, id },
            CoreError::Validation(message) => Self::Validation(message),
        }
    }
}
