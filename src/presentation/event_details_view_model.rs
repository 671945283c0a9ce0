use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::app::event_details_use_case::GetEventDetailsUseCase;
use crate::common::constants::MISSING_EVENT_ID_MESSAGE;
use crate::presentation::ui_state::EventDetailsScreenState;

/// Detail screen state holder for a single event id.
pub struct EventDetailsViewModel {
    state: watch::Receiver<EventDetailsScreenState>,
    driver: Option<JoinHandle<()>>,
}

impl EventDetailsViewModel {
    /// Without an id the screen goes straight to an error and nothing is fetched.
    pub fn new(use_case: Arc<GetEventDetailsUseCase>, event_id: Option<String>) -> Self {
        let event_id = match event_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                warn!("Event details opened without an event id");
                let (_, state) = watch::channel(EventDetailsScreenState::Error {
                    message: MISSING_EVENT_ID_MESSAGE.to_string(),
                });
                return Self { state, driver: None };
            }
        };

        let (state_tx, state_rx) = watch::channel(EventDetailsScreenState::Loading);
        let driver = tokio::spawn(async move {
            let next = match use_case.execute(&event_id).await {
                Ok(detail) => EventDetailsScreenState::Success(detail),
                Err(err) => EventDetailsScreenState::Error {
                    message: err.message().to_string(),
                },
            };
            state_tx.send_replace(next);
        });

        Self {
            state: state_rx,
            driver: Some(driver),
        }
    }

    pub fn state(&self) -> EventDetailsScreenState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EventDetailsScreenState> {
        self.state.clone()
    }
}

impl Drop for EventDetailsViewModel {
    fn drop(&mut self) {
        if let Some(driver) = &self.driver {
            driver.abort();
        }
    }
}
