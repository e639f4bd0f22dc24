//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Which endpoint feeds the analytics overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsSource {
    /// `GET /admin/audit-logs/summary`.
    #[default]
    AuditSummary,
    /// `GET /admin/analytics` (top questions, refusal rate).
    QueryAnalytics,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the FranchiseOps API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub analytics_source: AnalyticsSource,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            analytics_source: AnalyticsSource::default(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the URL is empty or lacks an
    /// `http://` / `https://` scheme.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                value: self.base_url.clone(),
                reason: "must not be empty",
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                value: self.base_url.clone(),
                reason: "must start with http:// or https://",
            });
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.analytics_source, AnalyticsSource::AuditSummary);
    }

    #[test]
    fn normalized_base_url_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn normalized_base_url_rejects_missing_scheme() {
        let config = ApiConfig {
            base_url: "api.example.com".into(),
            ..Default::default()
        };
        assert!(config.normalized_base_url().is_err());
    }
}
