//! WMATA client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the WMATA API
#[derive(Debug, Error)]
pub enum WmataError {
    /// The server answered with anything other than `200 OK`
    #[error("Got invalid response from WMATA server: Code: {status} Message: {reason}")]
    InvalidResponse {
        /// Numeric HTTP status code
        status: u16,
        /// Reason phrase sent with the status
        reason: String,
    },

    /// Connection to the WMATA API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out (only when a timeout is configured)
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response envelope lacks the expected top-level key
    #[error("Response is missing field '{0}'")]
    MissingField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl WmataError {
    /// Build a [`WmataError::InvalidResponse`] from an HTTP status
    ///
    /// `reason` is the phrase the server sent on its status line; the
    /// canonical phrase for `status` is used when it is absent.
    #[must_use]
    pub fn invalid_response(status: StatusCode, reason: Option<String>) -> Self {
        let reason = reason
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default();

        Self::InvalidResponse {
            status: status.as_u16(),
            reason,
        }
    }

    /// Upstream HTTP status, if the error came from a non-OK response
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
