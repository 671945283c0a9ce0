use serde::Serialize;

use crate::app::formatting::join_non_empty;
use crate::domain::{Event, Venue};

/// One row of the browse screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventUiState {
    pub id: String,
    pub name: String,
    pub image: String,
    pub date_time: String,
    pub location: String,
}

impl From<&Event> for EventUiState {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            image: event.image_url.clone(),
            date_time: join_non_empty([event.date.as_str(), event.time.as_str()]),
            location: venue_location(event.venue.as_ref()),
        }
    }
}

/// "Venue, City", skipping whichever part is empty.
pub fn venue_location(venue: Option<&Venue>) -> String {
    match venue {
        Some(venue) => join_non_empty([venue.name.as_str(), venue.city.as_str()]),
        None => String::new(),
    }
}

/// Content of the browse screen once at least one page has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EventsPage {
    pub events: Vec<EventUiState>,
    pub page: u32,
    pub is_loading_more: bool,
    pub pagination_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventsScreenState {
    Loading,
    Success(EventsPage),
    Error { message: String },
}

impl EventsScreenState {
    pub fn as_success(&self) -> Option<&EventsPage> {
        match self {
            EventsScreenState::Success(page) => Some(page),
            _ => None,
        }
    }

    /// Settled means no fetch is visibly in flight.
    pub fn is_settled(&self) -> bool {
        match self {
            EventsScreenState::Loading => false,
            EventsScreenState::Success(page) => !page.is_loading_more,
            EventsScreenState::Error { .. } => true,
        }
    }
}

/// Everything the detail screen renders, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetailUiState {
    pub name: String,
    pub image: String,
    pub date_time: String,
    pub location: String,
    pub price: Option<String>,
    pub info: Option<String>,
    pub seatmap_url: Option<String>,
    pub products: Vec<String>,
    pub genre: Option<String>,
    pub ticket_limit: Option<String>,
    pub age_restrictions: Option<String>,
    pub ticket_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventDetailsScreenState {
    Loading,
    Success(EventDetailUiState),
    Error { message: String },
}
