use hunter_client::ApiClient;
use hunter_config::HunterConfig;
use hunter_session::SessionStore;

use crate::cli::GlobalFlags;

/// What every command handler needs: configuration and the one session
/// store of this process.
pub struct AppContext {
    pub config: HunterConfig,
    pub store: SessionStore<ApiClient>,
}

impl AppContext {
    /// Build the client (applying `--backend-url`) and an uninitialized store.
    pub fn init(mut config: HunterConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(url) = &flags.backend_url {
            config.backend.url.clone_from(url);
        }
        let client = ApiClient::from_config(&config.backend)?;
        tracing::debug!(backend = client.base_url(), "backend client ready");

        Ok(Self {
            config,
            store: SessionStore::new(client),
        })
    }
}
