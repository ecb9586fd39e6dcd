//! Gateway failures.
//!
//! Three kinds of failure reach the caller: the request never completed
//! (transport or timeout), the server answered with a non-success status and
//! possibly a structured message, or a success response had an unusable shape.

use thiserror::Error;

/// Message used when a failed response carries no readable `error` field
pub const GENERIC_FAILURE: &str = "Request failed";

#[derive(Error, Debug)]
pub enum RequestError {
    /// The request could not be sent or the connection broke
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// No response within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Non-success status; `message` is the body's `error` field or the generic text
    #[error("{message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// A success response that could not be decoded into the expected record
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RequestError {
    /// Classify a reqwest failure into transport or timeout
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RequestError::Timeout
        } else if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err)
        }
    }

    /// Human-readable message shown to the operator
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(reqwest::StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_server_message() {
        let err = RequestError::Status {
            status: reqwest::StatusCode::CONFLICT,
            message: "seq_pallet already exists".to_string(),
        };
        assert_eq!(err.message(), "seq_pallet already exists");
        assert_eq!(err.status(), Some(reqwest::StatusCode::CONFLICT));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(RequestError::Timeout.message(), "request timed out");
        assert_eq!(RequestError::Timeout.status(), None);
    }
}
