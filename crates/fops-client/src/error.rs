//! API client error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// Body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// 429 Too Many Requests.
    #[error("rate limited; retry after {retry_after_secs}s: {message}")]
    RateLimited {
        retry_after_secs: u64,
        /// Response body, verbatim.
        message: String,
    },
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Response body of a non-success answer.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } | Self::RateLimited { message, .. } => Some(message),
            _ => None,
        }
    }
}
