use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing a search and holding a
/// [`WeatherDisplay`](crate::WeatherDisplay).
///
/// The query model turns every variant into an error state using the
/// `Display` text, so messages are written for end users.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City name must not be empty")]
    EmptyQuery,

    #[error("Failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather service responded with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to parse weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not read weather response: {0}")]
    Mapping(String),
}
