use crate::apis::discovery::models::{Image, NetworkEvent, NetworkVenue, PriceRange};
use crate::common::constants::DEFAULT_EVENT_TIME;
use crate::domain::{Event, EventDetail, Venue};

const PREFERRED_IMAGE_RATIO: &str = "16_9";
const PREFERRED_IMAGE_MIN_WIDTH: u32 = 1024;

/// Maps discovery API records to domain entities.
///
/// Mapping never fails: absent fields fall back to empty strings or `None`
/// and the browse use case decides what is renderable.
pub struct EventMapper;

impl EventMapper {
    /// Build a list Event from a search result
    pub fn map_event(network: &NetworkEvent) -> Event {
        let start = network.dates.as_ref().and_then(|d| d.start.as_ref());

        Event {
            id: network.id.clone().unwrap_or_default(),
            name: network.name.clone().unwrap_or_default(),
            image_url: network
                .images
                .as_ref()
                .and_then(|images| images.first())
                .and_then(|image| image.url.clone())
                .unwrap_or_default(),
            date: start.and_then(|s| s.local_date.clone()).unwrap_or_default(),
            time: start
                .and_then(|s| s.local_time.clone())
                .unwrap_or_else(|| DEFAULT_EVENT_TIME.to_string()),
            venue: first_venue(network).map(Self::map_listing_venue),
            test: network.test.unwrap_or(false),
        }
    }

    /// Listing venues carry the state code ("NY"), not the state name.
    fn map_listing_venue(venue: &NetworkVenue) -> Venue {
        Venue {
            name: venue.name.clone().unwrap_or_default(),
            city: venue.city.as_ref().and_then(|c| c.name.clone()).unwrap_or_default(),
            state: venue
                .state
                .as_ref()
                .and_then(|s| s.state_code.clone())
                .unwrap_or_default(),
            address: venue
                .address
                .as_ref()
                .and_then(|a| a.line1.clone())
                .unwrap_or_default(),
            ..Venue::default()
        }
    }

    /// Detail venues carry the full state name plus visitor notes.
    pub fn map_detail_venue(venue: &NetworkVenue) -> Venue {
        let general_info = venue.general_info.as_ref();
        Venue {
            name: venue.name.clone().unwrap_or_default(),
            city: venue.city.as_ref().and_then(|c| c.name.clone()).unwrap_or_default(),
            state: venue.state.as_ref().and_then(|s| s.name.clone()).unwrap_or_default(),
            address: venue
                .address
                .as_ref()
                .and_then(|a| a.line1.clone())
                .unwrap_or_default(),
            parking_detail: venue.parking_detail.clone(),
            general_rule: general_info.and_then(|g| g.general_rule.clone()),
            child_rule: general_info.and_then(|g| g.child_rule.clone()),
        }
    }

    /// Build an EventDetail from the detail endpoint
    pub fn map_event_detail(network: &NetworkEvent) -> EventDetail {
        let start = network.dates.as_ref().and_then(|d| d.start.as_ref());

        let info = [network.info.as_deref(), network.please_note.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n\n");

        let genre = network
            .classifications
            .iter()
            .flatten()
            .find(|c| c.primary.unwrap_or(false))
            .and_then(|c| c.genre.as_ref())
            .and_then(|g| g.name.clone());

        EventDetail {
            id: network.id.clone().unwrap_or_default(),
            name: network.name.clone().unwrap_or_default(),
            image_url: network
                .images
                .as_deref()
                .and_then(best_image)
                .and_then(|image| image.url.clone()),
            date: start.and_then(|s| s.local_date.clone()).unwrap_or_default(),
            time: start.and_then(|s| s.local_time.clone()).unwrap_or_default(),
            venue: first_venue(network).map(Self::map_detail_venue),
            info: (!info.trim().is_empty()).then_some(info),
            seatmap_url: network.seatmap.as_ref().and_then(|s| s.static_url.clone()),
            price: network
                .price_ranges
                .as_ref()
                .and_then(|ranges| ranges.first())
                .and_then(format_price_range),
            products: network
                .products
                .iter()
                .flatten()
                .filter_map(|p| p.name.clone())
                .collect(),
            genre,
            ticket_limit: network.ticket_limit.as_ref().and_then(|t| t.info.clone()),
            age_restrictions: network
                .age_restrictions
                .as_ref()
                .and_then(|a| a.legal_age_enforced)
                .map(|enforced| (if enforced { "Enforced" } else { "Not Enforced" }).to_string()),
            ticket_url: network.url.clone(),
        }
    }
}

fn first_venue(network: &NetworkEvent) -> Option<&NetworkVenue> {
    network
        .embedded
        .as_ref()
        .and_then(|e| e.venues.as_ref())
        .and_then(|venues| venues.first())
}

/// First wide, large image; otherwise whatever comes first.
fn best_image(images: &[Image]) -> Option<&Image> {
    images
        .iter()
        .find(|image| {
            image.ratio.as_deref() == Some(PREFERRED_IMAGE_RATIO)
                && image.width.unwrap_or(0) >= PREFERRED_IMAGE_MIN_WIDTH
        })
        .or_else(|| images.first())
}

fn format_price_range(range: &PriceRange) -> Option<String> {
    match (range.min, range.max) {
        (Some(min), Some(max)) => Some(format!("${:.2} - ${:.2}", min, max)),
        (Some(single), None) | (None, Some(single)) => Some(format!("${:.2}", single)),
        (None, None) => None,
    }
}
