use std::sync::Arc;

use crate::app::formatting::{format_date, format_time, join_non_empty};
use crate::app::load_result::LoadResult;
use crate::app::ports::EventRepository;
use crate::domain::EventDetail;
use crate::presentation::ui_state::{venue_location, EventDetailUiState};

/// Use case for loading one event, formatted for the detail screen
pub struct GetEventDetailsUseCase {
    repository: Arc<dyn EventRepository>,
}

impl GetEventDetailsUseCase {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, event_id: &str) -> LoadResult<EventDetailUiState> {
        let detail = self.repository.get_event_details(event_id).await?;
        Ok(to_ui_state(detail))
    }
}

fn to_ui_state(detail: EventDetail) -> EventDetailUiState {
    let formatted_date = format_date(&detail.date);
    let formatted_time = format_time(&detail.time);

    EventDetailUiState {
        date_time: join_non_empty([formatted_date.as_str(), formatted_time.as_str()]),
        location: venue_location(detail.venue.as_ref()),
        name: detail.name,
        image: detail.image_url.unwrap_or_default(),
        price: detail.price,
        info: detail.info,
        seatmap_url: detail.seatmap_url,
        products: detail.products,
        genre: detail.genre,
        ticket_limit: detail.ticket_limit,
        age_restrictions: detail.age_restrictions,
        ticket_url: detail.ticket_url,
    }
}
