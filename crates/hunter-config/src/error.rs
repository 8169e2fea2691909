//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `HUNTER_*` variable could not be read into the config.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// `backend.url` (or `HUNTER_BACKEND__URL`) cannot be used as a base URL.
    #[error("Invalid backend URL '{url}': {reason} (set backend.url or HUNTER_BACKEND__URL)")]
    InvalidBackendUrl { url: String, reason: &'static str },
}
