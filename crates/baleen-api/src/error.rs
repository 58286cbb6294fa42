//! API error types.
//!
//! `Display` of every variant is the message shown to the operator, so a
//! failed fetch can be surfaced as `error.to_string()` without further
//! mapping.

use thiserror::Error;

/// Message shown for a 404 response without a body.
pub const NOT_FOUND_MESSAGE: &str = "Sorry! the data you are looking for could not be found";

/// Message shown for a 500 response.
pub const SERVER_PROBLEM_MESSAGE: &str = "Sorry, it seems that there is a server problem";

/// Errors that can occur when talking to the Baleen backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, invalid body...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// 401 Unauthorized.
    #[error("Invalid credentials")]
    Unauthorized,

    /// 403 Forbidden.
    #[error("Access Forbidden")]
    Forbidden,

    /// 404 Not Found, with the response body or a default message.
    #[error("{message}")]
    NotFound { message: String },

    /// 500 Internal Server Error.
    #[error("Sorry, it seems that there is a server problem")]
    ServerProblem,

    /// Any other non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend-provided `message` field, or a generic status line.
        message: String,
    },

    /// The configured endpoint cannot be turned into a request URL.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// HTTP status behind the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::ServerProblem => Some(500),
            Self::Api { status, .. } => Some(*status),
            Self::InvalidEndpoint(_) => None,
        }
    }
}
