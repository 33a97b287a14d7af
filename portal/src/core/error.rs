//! # Common Error Types
//!
//! Consolidated error handling for the portal client.
//!
//! [`ApiError`] covers everything that can go wrong on the wire; [`AppError`]
//! is the application-wide type wrapping it together with configuration,
//! session and validation failures. Navigation guard decisions are values
//! ([`crate::app::router::NavigationOutcome`]), never errors.

use thiserror::Error;

/// Fallback shown when an error body carries no usable message.
pub const GENERIC_REQUEST_FAILURE: &str = "request failed, please try again later";

/// Outcome of a single API call that did not produce a payload.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server was unreachable or the transport failed mid-request.
    #[error("network error: {0}")]
    Transport(String),

    /// The server rejected the request with a non-success status.
    ///
    /// `message` is taken from the JSON error body when one is present,
    /// otherwise [`GENERIC_REQUEST_FAILURE`]. Display surfaces only the
    /// message so callers can show it to the user directly.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The server answered with a success status but an empty or
    /// undecodable body.
    #[error("server returned an empty or malformed response")]
    MalformedResponse,
}

impl ApiError {
    /// HTTP status that produced this error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error (bad or missing environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store error (persistence failures surfaced to the caller).
    #[error("Session error: {0}")]
    Session(String),

    /// Input validation error, raised before a request is issued.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_surfaces_server_message() {
        let err = ApiError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_and_malformed_have_no_status() {
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
        assert_eq!(ApiError::MalformedResponse.status(), None);
    }
}
