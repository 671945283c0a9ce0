//! Wire shapes for the discovery API.
//!
//! Every field is optional: the API omits whatever it does not know about an
//! event, and the mapper decides the defaults.

use serde::{Deserialize, Serialize};

/// Envelope returned by the event search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EventsEmbedded>,
    #[serde(rename = "_links", default)]
    pub links: Option<PageLinks>,
    #[serde(default)]
    pub page: Option<PageInfo>,
}

impl EventsResponse {
    /// The events on this page; an absent `_embedded` block means an empty page.
    pub fn into_events(self) -> Vec<NetworkEvent> {
        self.embedded
            .and_then(|embedded| embedded.events)
            .unwrap_or_default()
    }

    pub fn has_next_page(&self) -> bool {
        if let Some(next) = self.links.as_ref().and_then(|l| l.next.as_ref()) {
            return !next.href.is_empty();
        }
        match &self.page {
            Some(PageInfo {
                number: Some(number),
                total_pages: Some(total),
                ..
            }) => number.saturating_add(1) < *total,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsEmbedded {
    #[serde(default)]
    pub events: Option<Vec<NetworkEvent>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub first: Option<Link>,
    #[serde(default)]
    pub prev: Option<Link>,
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub last: Option<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
}

/// A single event, as found in search results and the detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub test: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub dates: Option<Dates>,
    #[serde(default)]
    pub classifications: Option<Vec<Classification>>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EventEmbedded>,
    #[serde(default)]
    pub price_ranges: Option<Vec<PriceRange>>,
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub please_note: Option<String>,
    #[serde(default)]
    pub seatmap: Option<Seatmap>,
    #[serde(default)]
    pub age_restrictions: Option<AgeRestrictions>,
    #[serde(default)]
    pub ticket_limit: Option<TicketLimit>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub ratio: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fallback: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dates {
    #[serde(default)]
    pub start: Option<StartDate>,
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartDate {
    #[serde(default)]
    pub local_date: Option<String>,
    #[serde(default)]
    pub local_time: Option<String>,
    #[serde(default)]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub primary: Option<bool>,
    #[serde(default)]
    pub segment: Option<IdName>,
    #[serde(default)]
    pub genre: Option<IdName>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdName {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventEmbedded {
    #[serde(default)]
    pub venues: Option<Vec<NetworkVenue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVenue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub state: Option<State>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub parking_detail: Option<String>,
    #[serde(default)]
    pub general_info: Option<GeneralInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    #[serde(default)]
    pub general_rule: Option<String>,
    #[serde(default)]
    pub child_rule: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seatmap {
    #[serde(default)]
    pub static_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRestrictions {
    #[serde(default)]
    pub legal_age_enforced: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketLimit {
    #[serde(default)]
    pub info: Option<String>,
}
