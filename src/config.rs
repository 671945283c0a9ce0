use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::app::repository::QueryPolicy;
use crate::common::constants::{
    API_KEY_ENV, CONFIG_PATH_ENV, DEFAULT_BASE_URL, DEFAULT_CONFIG_PATH, DEFAULT_COUNTRY_CODE,
    DEFAULT_PAGE_SIZE, DEFAULT_SORT, DEFAULT_START_DATE_OFFSET_DAYS, DEFAULT_TIMEOUT_SECONDS,
};
use crate::common::error::{EventixError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub base_url: String,
    pub api_key: String,
    pub country_code: String,
    pub sort: String,
    pub page_size: u32,
    /// Only list events starting this many days after today.
    pub restrict_start_date: bool,
    pub start_date_offset_days: i64,
    pub timeout_seconds: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            sort: DEFAULT_SORT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            restrict_start_date: true,
            start_date_offset_days: DEFAULT_START_DATE_OFFSET_DAYS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Loads `config.toml` (or `$EVENTIX_CONFIG`), falling back to defaults when
    /// the file does not exist, then applies `.env` / environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let config_content = fs::read_to_string(path).map_err(|e| {
                EventixError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
            })?;
            let config: Config = toml::from_str(&config_content)?;
            info!("Loaded configuration from {}", path.display());
            config
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        dotenv::dotenv().ok();
        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            config.discovery.api_key = api_key;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.discovery.page_size == 0 {
            return Err(EventixError::Config("page_size must be greater than zero".into()));
        }
        if self.discovery.base_url.trim().is_empty() {
            return Err(EventixError::Config("base_url must not be empty".into()));
        }
        Ok(())
    }
}

impl DiscoveryConfig {
    pub fn query_policy(&self) -> QueryPolicy {
        QueryPolicy {
            country_code: self.country_code.clone(),
            sort: self.sort.clone(),
            start_date_offset_days: self
                .restrict_start_date
                .then_some(self.start_date_offset_days),
        }
    }
}
