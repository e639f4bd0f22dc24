use chrono::{DateTime, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, AuditStatus, TimeWindow};

/// A read-only audit-log row as returned by `GET /admin/audit-logs`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditLogEntry {
    pub id: String,
    /// ISO-8601 timestamp. Kept verbatim; see [`AuditLogEntry::recorded_at`].
    pub timestamp: String,
    pub user_id: String,
    /// Action name. Free-form; the filter only offers a subset.
    pub action: String,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    pub status: AuditStatus,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

impl AuditLogEntry {
    /// Parse the timestamp, accepting RFC 3339 or a naive UTC datetime.
    #[must_use]
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse an API timestamp. Naive values are interpreted as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Response of `GET /admin/audit-logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AuditLogPage {
    #[serde(default)]
    pub logs: Vec<AuditLogEntry>,
    #[serde(default)]
    pub total: u64,
}

/// Filters for `GET /admin/audit-logs`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditLogQuery {
    pub window: TimeWindow,
    pub action: Option<AuditAction>,
    pub status: Option<AuditStatus>,
    pub limit: u32,
}

impl AuditLogQuery {
    /// Encode as a query string (without the leading `?`).
    ///
    /// `days` and `limit` are always present; `action` and `status` only
    /// when a filter is selected.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("days={}", self.window.days()),
            format!("limit={}", self.limit),
        ];
        if let Some(action) = self.action {
            params.push(format!("action={action}"));
        }
        if let Some(status) = self.status {
            params.push(format!("status={status}"));
        }
        params.join("&")
    }
}

/// Response of `GET /admin/audit-logs/export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportPayload {
    /// CSV document.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_string_without_filters() {
        let query = AuditLogQuery {
            window: TimeWindow::Week,
            action: None,
            status: None,
            limit: 50,
        };
        assert_eq!(query.to_query_string(), "days=7&limit=50");
    }

    #[test]
    fn query_string_with_filters() {
        let query = AuditLogQuery {
            window: TimeWindow::Month,
            action: Some(AuditAction::AuthFailure),
            status: Some(AuditStatus::Denied),
            limit: 10,
        };
        assert_eq!(
            query.to_query_string(),
            "days=30&limit=10&action=auth_failure&status=denied"
        );
    }

    #[test]
    fn timestamp_accepts_rfc3339_and_naive() {
        let aware = parse_timestamp("2025-03-01T10:15:00Z").unwrap();
        let naive = parse_timestamp("2025-03-01T10:15:00.250000").unwrap();
        assert_eq!(aware.timestamp(), naive.timestamp());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn log_page_defaults_when_fields_missing() {
        let page: AuditLogPage = serde_json::from_str("{}").unwrap();
        assert!(page.logs.is_empty());
        assert_eq!(page.total, 0);
    }
}
