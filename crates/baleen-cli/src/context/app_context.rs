use std::sync::Arc;

use anyhow::Context;
use baleen_api::ApiClient;
use baleen_config::BaleenConfig;
use baleen_store::VocabularyStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BaleenConfig,
    pub store: Arc<VocabularyStore<ApiClient>>,
}

impl AppContext {
    /// Build the API client from config and wrap it in a fresh store.
    pub fn init(config: BaleenConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)
            .with_context(|| format!("failed to build API client for {}", config.api.endpoint))?;

        tracing::debug!(endpoint = %client.base_url(), "api client ready");

        Ok(Self {
            config,
            store: Arc::new(VocabularyStore::new(client)),
        })
    }
}
