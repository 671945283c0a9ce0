use serde::{Deserialize, Serialize};

/// A venue flattened out of the discovery payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub parking_detail: Option<String>,
    pub general_rule: Option<String>,
    pub child_rule: Option<String>,
}

/// An event as listed on the browse screen.
///
/// `date` and `time` hold ISO strings straight from the mapper and are
/// replaced with display strings by the browse use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub date: String,
    pub time: String,
    pub venue: Option<Venue>,
    pub test: bool,
}

/// Everything the detail screen shows for a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub date: String,
    pub time: String,
    pub venue: Option<Venue>,
    pub info: Option<String>,
    pub seatmap_url: Option<String>,
    pub price: Option<String>,
    pub products: Vec<String>,
    pub genre: Option<String>,
    pub ticket_limit: Option<String>,
    pub age_restrictions: Option<String>,
    pub ticket_url: Option<String>,
}
