use async_trait::async_trait;

use crate::apis::discovery::models::{EventsResponse, NetworkEvent};
use crate::app::load_result::LoadResult;
use crate::common::error::Result;
use crate::domain::{Event, EventDetail};

/// Query parameters for one page of the event search endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSearchRequest {
    pub page: u32,
    pub size: u32,
    pub country_code: String,
    pub api_key: String,
    pub sort: String,
    pub start_date_time: Option<String>,
    pub keyword: Option<String>,
}

// Remote-side ports
#[async_trait]
pub trait RemoteDataSource: Send + Sync {
    async fn get_events(&self, request: &EventSearchRequest) -> Result<EventsResponse>;
    async fn get_event_details(&self, event_id: &str, api_key: &str) -> Result<NetworkEvent>;
}

pub trait ApiKeyProvider: Send + Sync {
    fn api_key(&self) -> String;
}

// Application-side port consumed by the use cases
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get_events(&self, page: u32, size: u32, keyword: Option<&str>) -> LoadResult<Vec<Event>>;
    async fn get_event_details(&self, event_id: &str) -> LoadResult<EventDetail>;
}
