use crate::app::ports::ApiKeyProvider;
use crate::config::DiscoveryConfig;

/// Serves the single credential fixed at startup.
pub struct StaticApiKeyProvider {
    api_key: String,
}

impl StaticApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.api_key.clone())
    }
}

impl ApiKeyProvider for StaticApiKeyProvider {
    fn api_key(&self) -> String {
        self.api_key.clone()
    }
}
