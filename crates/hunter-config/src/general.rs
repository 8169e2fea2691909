//! CLI presentation defaults.

use serde::{Deserialize, Serialize};

const fn default_history_limit() -> u32 {
    20
}

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Entries shown by `claimhunt history list` without `--limit`.
    /// Zero shows everything.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            history_limit: default_history_limit(),
        }
    }
}
