use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use crate::app::formatting::{format_date, format_time, parse_date, parse_time};
use crate::app::load_result::LoadResult;
use crate::app::ports::EventRepository;
use crate::common::constants::DEFAULT_PAGE_SIZE;
use crate::domain::Event;

/// Use case for browsing one page of events, ready for display
pub struct BrowseEventsUseCase {
    repository: Arc<dyn EventRepository>,
    page_size: u32,
}

impl BrowseEventsUseCase {
    pub fn new(repository: Arc<dyn EventRepository>, page_size: u32) -> Self {
        Self {
            repository,
            page_size,
        }
    }

    pub fn with_default_page_size(repository: Arc<dyn EventRepository>) -> Self {
        Self::new(repository, DEFAULT_PAGE_SIZE)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch `page` (optionally narrowed by `keyword`) and run it through [`process`].
    pub async fn execute(&self, page: u32, keyword: Option<&str>) -> LoadResult<Vec<Event>> {
        let events = self.repository.get_events(page, self.page_size, keyword).await?;
        let fetched = events.len();
        let processed = process(events);
        debug!(
            "Page {}: kept {} of {} events after filtering",
            page,
            processed.len(),
            fetched
        );
        Ok(processed)
    }
}

/// Filter, sort and format a fetched page.
pub fn process(events: Vec<Event>) -> Vec<Event> {
    let mut valid = filter_valid_events(events);
    sort_by_date_time(&mut valid);
    valid.into_iter().map(format_event).collect()
}

pub fn filter_valid_events(events: Vec<Event>) -> Vec<Event> {
    events.into_iter().filter(is_event_valid).collect()
}

pub fn is_event_valid(event: &Event) -> bool {
    !event.name.is_empty() && !event.image_url.is_empty() && has_valid_venue(event) && !event.test
}

fn has_valid_venue(event: &Event) -> bool {
    match &event.venue {
        Some(venue) => {
            !venue.name.is_empty()
                && !venue.city.is_empty()
                && !venue.state.is_empty()
                && !venue.address.is_empty()
        }
        None => false,
    }
}

/// Stable ascending sort by (date, time). Events whose date or time does not
/// parse go after every parsable one at the same level.
pub fn sort_by_date_time(events: &mut [Event]) {
    events.sort_by(|a, b| {
        let date_order = compare_parsed(parse_date(&a.date), parse_date(&b.date));
        date_order.then_with(|| compare_parsed(parse_time(&a.time), parse_time(&b.time)))
    });
}

fn compare_parsed<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn format_event(event: Event) -> Event {
    Event {
        date: format_date(&event.date),
        time: format_time(&event.time),
        ..event
    }
}
