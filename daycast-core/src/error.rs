//! Error taxonomy for the fetch and build pipeline.

use reqwest::StatusCode;
use thiserror::Error;

/// A single fetcher's failure: either the transport broke or the response
/// did not have the shape the upstream API documents.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not valid JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response parsed but the expected container is missing.
    #[error("response is missing the expected `{0}` data")]
    Shape(&'static str),

    /// A timestamp in the response could not be interpreted.
    #[error("unrecognized timestamp `{0}` in response")]
    Timestamp(String),
}

/// A failed snapshot build, tagged with the feed that failed.
///
/// `Display` is the user-facing message; the underlying [`FetchError`] stays
/// on the source chain for logging and tests.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to fetch weather data. Please try again later.")]
    Weather(#[source] FetchError),

    #[error("Failed to fetch radar data. Please try again later.")]
    Radar(#[source] FetchError),
}

impl BuildError {
    /// The fetch failure behind the user-facing message.
    pub fn cause(&self) -> &FetchError {
        match self {
            BuildError::Weather(err) | BuildError::Radar(err) => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_messages_are_fixed_strings() {
        let weather = BuildError::Weather(FetchError::Shape("hourly"));
        let radar = BuildError::Radar(FetchError::Shape("radar.past"));

        assert_eq!(
            weather.to_string(),
            "Failed to fetch weather data. Please try again later."
        );
        assert_eq!(
            radar.to_string(),
            "Failed to fetch radar data. Please try again later."
        );
    }

    #[test]
    fn cause_is_preserved_behind_the_message() {
        let err = BuildError::Weather(FetchError::Shape("hourly"));
        assert!(err.cause().to_string().contains("`hourly`"));

        use std::error::Error;
        assert!(err.source().is_some());
    }
}
