pub mod ports;
pub mod load_result;
pub mod mapper;
pub mod repository;
pub mod formatting;
pub mod browse_events_use_case;
pub mod event_details_use_case;
