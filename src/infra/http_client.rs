use crate::apis::discovery::models::{EventsResponse, NetworkEvent};
use crate::app::ports::{EventSearchRequest, RemoteDataSource};
use crate::common::constants::{EVENTS_PATH, EVENT_DETAILS_PATH};
use crate::common::error::{EventixError, Result};
use crate::config::DiscoveryConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// reqwest-backed client for the discovery API.
pub struct ReqwestDiscoveryClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestDiscoveryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DiscoveryConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}discovery/v2/events/{id}` with the id as one encoded segment.
    fn detail_url(&self, event_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.endpoint(EVENT_DETAILS_PATH))
            .map_err(|e| EventixError::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| EventixError::Config(format!("Base URL '{}' cannot take a path", self.base_url)))?
            .push(event_id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let resp = self.client.get(url).query(query).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let message = fault_message(&bytes)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "request failed".to_string());
            warn!(status = status.as_u16(), "Discovery API returned an error: {}", message);
            return Err(EventixError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pulls the human-readable reason out of an API error body, if there is one.
fn fault_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value["fault"]["faultstring"]
        .as_str()
        .or_else(|| value["errors"][0]["detail"].as_str())
        .map(str::to_string)
}

#[async_trait]
impl RemoteDataSource for ReqwestDiscoveryClient {
    #[instrument(skip(self, request), fields(page = request.page, keyword = ?request.keyword))]
    async fn get_events(&self, request: &EventSearchRequest) -> Result<EventsResponse> {
        let mut query = vec![
            ("page", request.page.to_string()),
            ("size", request.size.to_string()),
            ("countryCode", request.country_code.clone()),
            ("apikey", request.api_key.clone()),
            ("sort", request.sort.clone()),
        ];
        if let Some(start) = &request.start_date_time {
            query.push(("startDateTime", start.clone()));
        }
        if let Some(keyword) = &request.keyword {
            query.push(("keyword", keyword.clone()));
        }

        let response: EventsResponse = self.get_json(&self.endpoint(EVENTS_PATH), &query).await?;
        debug!(has_next = response.has_next_page(), "Fetched event search page");
        Ok(response)
    }

    #[instrument(skip(self, api_key))]
    async fn get_event_details(&self, event_id: &str, api_key: &str) -> Result<NetworkEvent> {
        let url = self.detail_url(event_id)?;
        self.get_json(url.as_str(), &[("apikey", api_key.to_string())]).await
    }
}
