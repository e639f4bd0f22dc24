//! # fops-client
//!
//! Typed HTTP client for the FranchiseOps API.
//!
//! One method per endpoint:
//! - `POST /chat`
//! - `POST /admin/upload` (multipart) and `POST /admin/reindex`
//! - `GET /admin/audit-logs`, `/admin/audit-logs/summary`,
//!   `/admin/audit-logs/export`
//! - `GET /admin/analytics`
//!
//! The client never retries. Callers decide how a failure is shown.

mod admin;
mod audit;
mod chat;
mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

use fops_config::{ApiConfig, ConfigError};

const USER_AGENT: &str = concat!("fops/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Create a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientInitError`] if the base URL is invalid or the HTTP
    /// client fails to build.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientInitError> {
        let base_url = config.normalized_base_url()?;
        Ok(Self::new(base_url, Duration::from_secs(config.timeout_secs))?)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }
}

/// Failure to construct an [`ApiClient`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientInitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn from_config_rejects_bad_base_url() {
        let config = ApiConfig {
            base_url: "localhost:8000".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            ApiClient::from_config(&config),
            Err(ClientInitError::Config(_))
        ));
    }
}
