//! General display configuration.

use serde::{Deserialize, Serialize};

fn default_placeholder() -> String {
    "-".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Text shown for a hierarchy level that is unset or cannot be resolved.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}
