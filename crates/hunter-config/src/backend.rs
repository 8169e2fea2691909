//! Analysis backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Loopback address of a locally running backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

fn default_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in seconds. `0` waits indefinitely.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: 0,
        }
    }
}

impl BackendConfig {
    /// The base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackendUrl`] if the URL is not an absolute
    /// `http` or `https` URL with a host.
    pub fn base_url(&self) -> Result<&str, ConfigError> {
        let url = self.url.trim().trim_end_matches('/');
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| self.invalid_url("expected an http:// or https:// URL"))?;
        if rest.split('/').next().is_none_or(str::is_empty) {
            return Err(self.invalid_url("missing host"));
        }
        Ok(url)
    }

    fn invalid_url(&self, reason: &'static str) -> ConfigError {
        ConfigError::InvalidBackendUrl {
            url: self.url.clone(),
            reason,
        }
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}
