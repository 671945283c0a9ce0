use thiserror::Error;

/// Failures below the repository boundary.
///
/// Nothing above `EventRepositoryImpl` sees these directly; they are
/// flattened into a `LoadError` message there.
#[derive(Error, Debug)]
pub enum EventixError {
    /// Transport failure: connect, timeout, body read.
    #[error("Discovery request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed discovery response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx answer from the discovery API, with its fault text.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, EventixError>;
