// ── Core error types ──
//
// Failures of the facade itself (building the HTTP client, bad config).
// Fetch failures never surface here: they are captured as
// `ResourceState::Error` by the resource cache.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot build HTTP client: {reason}")]
    ClientSetup { reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<newsfront_api::Error> for CoreError {
    fn from(err: newsfront_api::Error) -> Self {
        match err {
            newsfront_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            other => CoreError::ClientSetup {
                reason: other.to_string(),
            },
        }
    }
}
