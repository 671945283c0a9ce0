use thiserror::Error;

use crate::common::constants::UNKNOWN_ERROR_MESSAGE;
use crate::common::error::EventixError;

/// Failure value handed from the repository to use cases and screens.
///
/// Transport and decoding errors are flattened into their message here, so
/// nothing above the repository ever matches on `EventixError`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct LoadError {
    message: Option<String>,
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    pub fn unknown() -> Self {
        Self { message: None }
    }

    /// The user-facing message, or "Unknown Error" when none was captured.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}

impl From<EventixError> for LoadError {
    fn from(err: EventixError) -> Self {
        LoadError::new(err.to_string())
    }
}
