use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::app::load_result::{LoadError, LoadResult};
use crate::app::mapper::EventMapper;
use crate::app::ports::{ApiKeyProvider, EventRepository, EventSearchRequest, RemoteDataSource};
use crate::common::constants::{DEFAULT_COUNTRY_CODE, DEFAULT_SORT, DEFAULT_START_DATE_OFFSET_DAYS};
use crate::domain::{Event, EventDetail};

/// Product rules baked into every search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPolicy {
    pub country_code: String,
    pub sort: String,
    /// `Some(n)` restricts listings to events starting `n` days from today.
    pub start_date_offset_days: Option<i64>,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            sort: DEFAULT_SORT.to_string(),
            start_date_offset_days: Some(DEFAULT_START_DATE_OFFSET_DAYS),
        }
    }
}

impl QueryPolicy {
    /// `startDateTime` for a listing made on `today`, e.g. `2025-01-02T00:00:00Z`.
    pub fn start_date_time(&self, today: NaiveDate) -> Option<String> {
        let offset = self.start_date_offset_days?;
        let start = if offset >= 0 {
            today.checked_add_days(Days::new(offset.unsigned_abs()))
        } else {
            today.checked_sub_days(Days::new(offset.unsigned_abs()))
        }?;
        Some(format!("{}T00:00:00Z", start.format("%Y-%m-%d")))
    }
}

/// Repository over the discovery API.
///
/// This is the error boundary: whatever the remote source fails with comes
/// back as a `LoadError`.
pub struct EventRepositoryImpl {
    remote: Arc<dyn RemoteDataSource>,
    api_key_provider: Arc<dyn ApiKeyProvider>,
    policy: QueryPolicy,
}

impl EventRepositoryImpl {
    pub fn new(
        remote: Arc<dyn RemoteDataSource>,
        api_key_provider: Arc<dyn ApiKeyProvider>,
        policy: QueryPolicy,
    ) -> Self {
        Self {
            remote,
            api_key_provider,
            policy,
        }
    }

    fn search_request(&self, page: u32, size: u32, keyword: Option<&str>) -> EventSearchRequest {
        EventSearchRequest {
            page,
            size,
            country_code: self.policy.country_code.clone(),
            api_key: self.api_key_provider.api_key(),
            sort: self.policy.sort.clone(),
            start_date_time: self.policy.start_date_time(Local::now().date_naive()),
            keyword: keyword.map(str::to_string),
        }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    #[instrument(skip(self))]
    async fn get_events(&self, page: u32, size: u32, keyword: Option<&str>) -> LoadResult<Vec<Event>> {
        let request = self.search_request(page, size, keyword);
        let response = self.remote.get_events(&request).await.map_err(|e| {
            warn!("Event search failed: {}", e);
            LoadError::from(e)
        })?;

        let events: Vec<Event> = response
            .into_events()
            .iter()
            .map(EventMapper::map_event)
            .collect();
        info!("Fetched {} events for page {}", events.len(), page);
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn get_event_details(&self, event_id: &str) -> LoadResult<EventDetail> {
        let api_key = self.api_key_provider.api_key();
        let network = self
            .remote
            .get_event_details(event_id, &api_key)
            .await
            .map_err(|e| {
                warn!("Event detail fetch failed: {}", e);
                LoadError::from(e)
            })?;

        debug!("Fetched details for event {}", event_id);
        Ok(EventMapper::map_event_detail(&network))
    }
}
