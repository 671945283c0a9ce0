//! Transitions of the browse screen state machine.
//!
//! Pure functions only; `EventsViewModel` decides when they run.

use crate::app::load_result::LoadResult;
use crate::domain::Event;
use crate::presentation::ui_state::{EventUiState, EventsPage, EventsScreenState};

/// What the screen is currently asking for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventsQuery {
    pub page: u32,
    pub keyword: Option<String>,
}

impl EventsQuery {
    /// First page of a keyword search. Blank keywords mean "no search".
    pub fn search(keyword: &str) -> Self {
        let trimmed = keyword.trim();
        Self {
            page: 0,
            keyword: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    /// The page after `current_page`, keeping this query's keyword.
    pub fn next_page(&self, current_page: u32) -> Self {
        Self {
            page: current_page + 1,
            keyword: self.keyword.clone(),
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }
}

/// State to show as soon as `query` is issued, if it differs from `current`.
///
/// Only a follow-up page on top of loaded content shows progress; first-page
/// queries keep whatever is on screen until their result lands.
pub fn on_query_started(current: &EventsScreenState, query: &EventsQuery) -> Option<EventsScreenState> {
    match current {
        EventsScreenState::Success(page) if !query.is_first_page() => {
            Some(EventsScreenState::Success(EventsPage {
                is_loading_more: true,
                pagination_error: None,
                ..page.clone()
            }))
        }
        _ => None,
    }
}

/// State after `query` completes. `previous` is the state observed when the
/// query was issued.
pub fn on_query_finished(
    previous: &EventsScreenState,
    query: &EventsQuery,
    result: LoadResult<Vec<Event>>,
) -> EventsScreenState {
    let previous_page = previous.as_success();
    let previous_events = previous_page.map(|p| p.events.clone()).unwrap_or_default();

    match result {
        Ok(events) => {
            let new_events = events.iter().map(EventUiState::from);
            let accumulated = if query.is_first_page() {
                new_events.collect()
            } else {
                previous_events.into_iter().chain(new_events).collect()
            };
            EventsScreenState::Success(EventsPage {
                events: accumulated,
                page: query.page,
                is_loading_more: false,
                pagination_error: None,
            })
        }
        Err(err) if query.is_first_page() => EventsScreenState::Error {
            message: err.message().to_string(),
        },
        Err(err) => EventsScreenState::Success(EventsPage {
            events: previous_events,
            page: previous_page
                .map(|p| p.page)
                .unwrap_or_else(|| query.page.saturating_sub(1)),
            is_loading_more: false,
            pagination_error: Some(err.message().to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::load_result::LoadError;
    use crate::domain::Venue;

    fn event(name: &str) -> Event {
        Event {
            id: format!("id-{}", name),
            name: name.into(),
            image_url: format!("https://img/{}.jpg", name),
            date: "Wed, 25 December".into(),
            time: "7:30 pm".into(),
            venue: Some(Venue {
                name: "Venue".into(),
                city: "City".into(),
                state: "ST".into(),
                address: "1 Main St".into(),
                ..Venue::default()
            }),
            test: false,
        }
    }

    fn names(state: &EventsScreenState) -> Vec<String> {
        state
            .as_success()
            .unwrap()
            .events
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    fn initial_success() -> EventsScreenState {
        on_query_finished(
            &EventsScreenState::Loading,
            &EventsQuery::default(),
            Ok(vec![event("Concert"), event("Sports")]),
        )
    }

    #[test]
    fn test_search_query_normalizes_keyword() {
        assert_eq!(EventsQuery::search("  jazz ").keyword.as_deref(), Some("jazz"));
        assert_eq!(EventsQuery::search("   ").keyword, None);
        assert_eq!(EventsQuery::search("").page, 0);
    }

    #[test]
    fn test_initial_load_success() {
        let state = initial_success();

        let page = state.as_success().unwrap();
        assert_eq!(names(&state), vec!["Concert", "Sports"]);
        assert_eq!(page.page, 0);
        assert!(!page.is_loading_more);
        assert_eq!(page.pagination_error, None);
        assert_eq!(page.events[0].date_time, "Wed, 25 December, 7:30 pm");
        assert_eq!(page.events[0].location, "Venue, City");
    }

    #[test]
    fn test_next_page_shows_loading_more_first() {
        let current = initial_success();
        let query = EventsQuery::default().next_page(0);

        let started = on_query_started(&current, &query).unwrap();

        let page = started.as_success().unwrap();
        assert!(page.is_loading_more);
        assert_eq!(page.page, 0);
        assert_eq!(page.events.len(), 2);
    }

    #[test]
    fn test_first_page_queries_do_not_show_loading_more() {
        assert_eq!(on_query_started(&initial_success(), &EventsQuery::search("jazz")), None);
        assert_eq!(
            on_query_started(&EventsScreenState::Loading, &EventsQuery { page: 1, keyword: None }),
            None
        );
    }

    #[test]
    fn test_pagination_appends() {
        let previous = initial_success();
        let query = EventsQuery::default().next_page(0);

        let state = on_query_finished(&previous, &query, Ok(vec![event("Theater")]));

        assert_eq!(names(&state), vec!["Concert", "Sports", "Theater"]);
        let page = state.as_success().unwrap();
        assert_eq!(page.page, 1);
        assert!(!page.is_loading_more);
        assert_eq!(page.pagination_error, None);
    }

    #[test]
    fn test_pagination_failure_keeps_content_and_page() {
        let previous = initial_success();
        let query = EventsQuery::default().next_page(0);

        let state = on_query_finished(&previous, &query, Err(LoadError::new("Network error")));

        assert_eq!(names(&state), vec!["Concert", "Sports"]);
        let page = state.as_success().unwrap();
        assert_eq!(page.page, 0);
        assert!(!page.is_loading_more);
        assert_eq!(page.pagination_error.as_deref(), Some("Network error"));
    }

    #[test]
    fn test_search_replaces_accumulated_events() {
        let first = initial_success();
        let second = on_query_finished(
            &first,
            &EventsQuery::default().next_page(0),
            Ok(vec![event("Theater")]),
        );
        assert_eq!(names(&second).len(), 3);

        let state = on_query_finished(&second, &EventsQuery::search("jazz"), Ok(vec![event("Jazz")]));

        assert_eq!(names(&state), vec!["Jazz"]);
        assert_eq!(state.as_success().unwrap().page, 0);
    }

    #[test]
    fn test_initial_failure_is_full_screen_error() {
        let state = on_query_finished(
            &EventsScreenState::Loading,
            &EventsQuery::default(),
            Err(LoadError::new("Network error")),
        );

        assert_eq!(
            state,
            EventsScreenState::Error {
                message: "Network error".into()
            }
        );
    }

    #[test]
    fn test_search_failure_discards_content() {
        let state = on_query_finished(&initial_success(), &EventsQuery::search("jazz"), Err(LoadError::unknown()));

        assert_eq!(
            state,
            EventsScreenState::Error {
                message: "Unknown Error".into()
            }
        );
    }

    #[test]
    fn test_empty_page_is_success() {
        let state = on_query_finished(&EventsScreenState::Loading, &EventsQuery::default(), Ok(Vec::new()));

        assert!(state.as_success().unwrap().events.is_empty());
    }
}
