//! # hunter-config
//!
//! Layered configuration loading for Claim Hunter using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HUNTER_*` prefix, `__` as separator)
//! 2. Project-level `.claim-hunter/config.toml`
//! 3. User-level `~/.config/claim-hunter/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HUNTER_BACKEND__URL` -> `backend.url`,
//! `HUNTER_GENERAL__HISTORY_LIMIT` -> `general.history_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use hunter_config::HunterConfig;
//!
//! let config = HunterConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.url);
//! ```

mod backend;
mod error;
mod general;

pub use backend::{BackendConfig, DEFAULT_BACKEND_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used for both the user-global and project-local config.
const CONFIG_DIR_NAME: &str = "claim-hunter";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HunterConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HunterConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type, and [`ConfigError::InvalidBackendUrl`] if the backend
    /// URL is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.base_url()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then all other sources.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(format!(".{CONFIG_DIR_NAME}/config.toml"));
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HUNTER_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HunterConfig::default();
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.general.history_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: HunterConfig = HunterConfig::figment().extract()?;
            assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
            assert_eq!(config.backend.timeout_secs, 0);
            Ok(())
        });
    }
}
