use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::browse_events_use_case::BrowseEventsUseCase;
use crate::presentation::events_reducer::{on_query_finished, on_query_started, EventsQuery};
use crate::presentation::ui_state::EventsScreenState;

/// The current query plus how many resets (initial load, searches) led to it.
#[derive(Debug, Clone, Default)]
struct QueryIntent {
    query: EventsQuery,
    reset: u64,
}

/// Browse screen state holder.
///
/// Queries go to a single driver task over a watch channel, so only the
/// newest query is ever followed: issuing another while a fetch is in flight
/// drops that fetch. Dropping the view model stops the driver.
pub struct EventsViewModel {
    state: watch::Receiver<EventsScreenState>,
    intents: watch::Sender<QueryIntent>,
    /// Reset whose first page is on screen. The driver publishes state and
    /// bumps this under the same lock.
    settled_reset: Arc<Mutex<u64>>,
    driver: JoinHandle<()>,
}

impl EventsViewModel {
    /// Starts loading the first page immediately. Must be called inside a
    /// tokio runtime.
    pub fn new(use_case: Arc<BrowseEventsUseCase>) -> Self {
        let (state_tx, state_rx) = watch::channel(EventsScreenState::Loading);
        let (intent_tx, intent_rx) = watch::channel(QueryIntent::default());
        let settled_reset = Arc::new(Mutex::new(0));
        let driver = tokio::spawn(drive(use_case, intent_rx, state_tx, settled_reset.clone()));

        Self {
            state: state_rx,
            intents: intent_tx,
            settled_reset,
            driver,
        }
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> EventsScreenState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<EventsScreenState> {
        self.state.clone()
    }

    /// Requests the page after the last loaded one.
    ///
    /// Ignored until some content has loaded, and while a search has not
    /// yet produced its first page: the content on screen then belongs to
    /// the previous query. Calling it after a pagination error retries the
    /// failed page.
    pub fn load_next_page(&self) {
        let requested = self.intents.send_if_modified(|intent| {
            let settled = lock(&self.settled_reset);
            if *settled != intent.reset {
                return false;
            }
            let current_page = match self.state.borrow().as_success() {
                Some(page) => page.page,
                None => return false,
            };
            drop(settled);

            intent.query = intent.query.next_page(current_page);
            true
        });
        if !requested {
            debug!("Next page request ignored; no settled content to extend");
        }
    }

    /// Restarts from the first page with `keyword`; blank clears the search.
    pub fn search(&self, keyword: &str) {
        self.intents.send_modify(|intent| {
            intent.query = EventsQuery::search(keyword);
            intent.reset += 1;
        });
    }
}

impl Drop for EventsViewModel {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

fn lock(settled_reset: &Mutex<u64>) -> MutexGuard<'_, u64> {
    settled_reset.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn drive(
    use_case: Arc<BrowseEventsUseCase>,
    mut intents: watch::Receiver<QueryIntent>,
    state: watch::Sender<EventsScreenState>,
    settled_reset: Arc<Mutex<u64>>,
) {
    loop {
        let QueryIntent { query, reset } = intents.borrow_and_update().clone();
        let previous = state.borrow().clone();
        debug!(page = query.page, keyword = ?query.keyword, reset, "Running events query");

        if let Some(started) = on_query_started(&previous, &query) {
            state.send_replace(started);
        }

        let fetch = use_case.execute(query.page, query.keyword.as_deref());
        tokio::select! {
            result = fetch => {
                {
                    let mut settled = lock(&settled_reset);
                    state.send_replace(on_query_finished(&previous, &query, result));
                    if query.is_first_page() {
                        *settled = reset;
                    }
                }
                if intents.changed().await.is_err() {
                    break;
                }
            }
            changed = intents.changed() => {
                if changed.is_err() {
                    break;
                }
                info!(page = query.page, "Events query superseded by a newer one");
            }
        }
    }
    debug!("Events driver stopped");
}
