//! Errors raised while loading or validating Mantis settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to parse, or a value has the wrong type.
    #[error("failed to read configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but cannot be used (e.g. `api.timeout_secs = 0`).
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
