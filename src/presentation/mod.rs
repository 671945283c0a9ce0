pub mod event_details_view_model;
pub mod events_reducer;
pub mod events_view_model;
pub mod ui_state;
