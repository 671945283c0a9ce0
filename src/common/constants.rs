/// Discovery API endpoints and query defaults.
/// Policy values here are only defaults; `config::DiscoveryConfig` overrides them.

// Endpoints
pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/";
pub const EVENTS_PATH: &str = "discovery/v2/events.json";
pub const EVENT_DETAILS_PATH: &str = "discovery/v2/events";

// Query defaults
pub const DEFAULT_COUNTRY_CODE: &str = "US";
pub const DEFAULT_SORT: &str = "date,asc";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_START_DATE_OFFSET_DAYS: i64 = 1;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

// Mapper defaults
pub const DEFAULT_EVENT_TIME: &str = "19:00:00";

// Environment variables
pub const API_KEY_ENV: &str = "EVENTIX_API_KEY";
pub const CONFIG_PATH_ENV: &str = "EVENTIX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

// User-facing messages
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";
pub const MISSING_EVENT_ID_MESSAGE: &str = "Event ID not provided";
