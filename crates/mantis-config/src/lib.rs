//! # mantis-config
//!
//! Layered configuration loading for Mantis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MANTIS_*` prefix, `__` as separator)
//! 2. Project-level `.mantis/config.toml`
//! 3. User-level `~/.config/mantis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MANTIS_API__BASE_URL` -> `api.base_url`,
//! `MANTIS_GENERAL__PLACEHOLDER` -> `general.placeholder`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mantis_config::MantisConfig;
//!
//! let config = MantisConfig::load_with_dotenv().expect("config");
//! println!("API at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MantisConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MantisConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment. Tests build their own
    /// provider chains and go through here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mantis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MANTIS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mantis").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = MantisConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5006");
        assert_eq!(config.general.placeholder, "-");
    }

    #[test]
    fn defaults_survive_figment_roundtrip() {
        let figment = Figment::from(Serialized::defaults(MantisConfig::default()));
        let config = MantisConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config.api.timeout_secs, 10);
    }
}
