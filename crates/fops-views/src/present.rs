//! Display rules shared by every front end: truncation, labels, and the
//! row/card shapes of the analytics tabs.

use fops_core::entities::{AnalyticsSummary, AuditLogEntry, RecentFailure, TopUser, parse_timestamp};
use serde::Serialize;

pub const TOP_USERS_SHOWN: usize = 10;
pub const RECENT_FAILURES_SHOWN: usize = 5;
pub const TOP_USER_ID_CHARS: usize = 20;
pub const LOG_USER_ID_CHARS: usize = 15;
pub const RESOURCE_ID_CHARS: usize = 10;
pub const EMPTY_LOGS_MESSAGE: &str = "No audit logs found for the selected filters.";
pub const EMPTY_LOGS_HINT: &str =
    "Try uploading a document or performing other actions to generate logs.";

/// `auth_failure` → `auth failure`
#[must_use]
pub fn action_label(action: &str) -> String {
    action.replace('_', " ")
}

/// First `max` characters followed by `...`. The ellipsis is always added.
#[must_use]
pub fn clip(value: &str, max: usize) -> String {
    let head: String = value.chars().take(max).collect();
    format!("{head}...")
}

/// `91.7%`
#[must_use]
pub fn percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Timestamp in the viewer's terms, or the raw value when it does not parse.
#[must_use]
pub fn display_timestamp(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// `"{resource_type}: {resource_id[..10]}..."`, or `-` when either part is missing.
#[must_use]
pub fn resource_cell(resource_type: Option<&str>, resource_id: Option<&str>) -> String {
    match (resource_type, resource_id) {
        (Some(kind), Some(id)) => format!("{kind}: {}", clip(id, RESOURCE_ID_CHARS)),
        _ => "-".to_string(),
    }
}

/// One row of the logs tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub timestamp: String,
    pub action: String,
    pub user: String,
    pub status: String,
    pub resource: String,
    pub ip: String,
}

impl From<&AuditLogEntry> for LogRow {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            timestamp: display_timestamp(&entry.timestamp),
            action: action_label(&entry.action),
            user: clip(&entry.user_id, LOG_USER_ID_CHARS),
            status: entry.status.to_string(),
            resource: resource_cell(entry.resource_type.as_deref(), entry.resource_id.as_deref()),
            ip: entry.ip_address.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopUserRow {
    pub rank: usize,
    pub user: String,
    pub actions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureCard {
    pub action: String,
    pub status: String,
    pub timestamp: String,
    pub user_id: String,
    /// Pretty-printed metadata, when present.
    pub metadata: Option<String>,
}

impl From<&RecentFailure> for FailureCard {
    fn from(failure: &RecentFailure) -> Self {
        Self {
            action: action_label(&failure.action),
            status: failure.status.to_string(),
            timestamp: display_timestamp(&failure.timestamp),
            user_id: failure.user_id.clone(),
            metadata: failure
                .metadata
                .as_ref()
                .and_then(|m| serde_json::to_string_pretty(m).ok()),
        }
    }
}

/// What the overview tab shows for one summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub period_days: u32,
    pub total_actions: u64,
    pub success_rate: String,
    pub failures: u64,
    pub denied: u64,
    /// `(label, count)` with underscores shown as spaces. Empty for the
    /// query-analytics shape.
    pub actions_by_type: Vec<(String, u64)>,
    pub top_users: Vec<TopUserRow>,
    pub recent_failures: Vec<FailureCard>,
    pub total_queries: Option<u64>,
    /// `(question, count)` leaderboard from the query-analytics shape.
    pub top_questions: Vec<(String, u64)>,
    pub refusal_rate: Option<String>,
}

impl Overview {
    #[must_use]
    pub fn from_summary(summary: &AnalyticsSummary) -> Self {
        let query_shape = summary.is_query_analytics();
        Self {
            period_days: summary.period_days,
            total_actions: summary.total_actions,
            success_rate: percent(summary.success_rate),
            failures: summary.status_summary.failure,
            denied: summary.status_summary.denied,
            actions_by_type: if query_shape {
                Vec::new()
            } else {
                summary
                    .actions_by_type
                    .iter()
                    .map(|(action, count)| (action_label(action), *count))
                    .collect()
            },
            top_users: top_user_rows(&summary.top_users),
            recent_failures: summary
                .recent_failures
                .iter()
                .take(RECENT_FAILURES_SHOWN)
                .map(FailureCard::from)
                .collect(),
            total_queries: summary.total_queries,
            top_questions: summary
                .top_questions
                .iter()
                .map(|q| (q.question.clone(), q.count))
                .collect(),
            refusal_rate: summary.refusal_rate.map(percent),
        }
    }
}

fn top_user_rows(users: &[TopUser]) -> Vec<TopUserRow> {
    users
        .iter()
        .take(TOP_USERS_SHOWN)
        .enumerate()
        .map(|(i, user)| TopUserRow {
            rank: i + 1,
            user: clip(&user.user_id, TOP_USER_ID_CHARS),
            actions: user.action_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fops_core::entities::{StatusSummary, TopQuestion};
    use fops_core::enums::AuditStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("permission_denied", "permission denied")]
    #[case("upload", "upload")]
    #[case("a_b_c", "a b c")]
    fn labels_replace_every_underscore(#[case] action: &str, #[case] expected: &str) {
        assert_eq!(action_label(action), expected);
    }

    #[rstest]
    #[case(91.666, "91.7%")]
    #[case(100.0, "100.0%")]
    #[case(0.0, "0.0%")]
    fn percent_has_one_decimal(#[case] rate: f64, #[case] expected: &str) {
        assert_eq!(percent(rate), expected);
    }

    #[test]
    fn clip_always_adds_ellipsis() {
        assert_eq!(clip("user_2abcdefghijklmnopqrstuvwxyz", 15), "user_2abcdefghi...");
        assert_eq!(clip("short", 15), "short...");
    }

    #[test]
    fn log_row_formats_every_cell() {
        let entry = AuditLogEntry {
            id: "log_1".into(),
            timestamp: "2025-01-02T03:04:05".into(),
            user_id: "user_2abcdefghijklmnop".into(),
            action: "auth_failure".into(),
            resource_type: Some("document".into()),
            resource_id: Some("doc_1234567890abcdef".into()),
            status: AuditStatus::Failure,
            metadata: None,
            ip_address: None,
        };
        let row = LogRow::from(&entry);
        assert_eq!(
            row,
            LogRow {
                timestamp: "2025-01-02 03:04:05 UTC".into(),
                action: "auth failure".into(),
                user: "user_2abcdefghi...".into(),
                status: "failure".into(),
                resource: "document: doc_123456...".into(),
                ip: "-".into(),
            }
        );
    }

    #[test]
    fn resource_cell_needs_both_parts() {
        assert_eq!(resource_cell(Some("document"), None), "-");
        assert_eq!(resource_cell(None, Some("doc_1")), "-");
    }

    #[test]
    fn overview_caps_users_and_failures() {
        let summary = AnalyticsSummary {
            period_days: 7,
            total_actions: 30,
            actions_by_type: [("auth_failure".to_string(), 3)].into_iter().collect(),
            status_summary: StatusSummary {
                success: 20,
                failure: 7,
                denied: 3,
            },
            success_rate: 66.666,
            top_users: (0..12)
                .map(|i| TopUser {
                    user_id: format!("user_{i:020}"),
                    action_count: 12 - i,
                })
                .collect(),
            recent_failures: (0..8)
                .map(|i| RecentFailure {
                    timestamp: "2025-01-01T00:00:00Z".into(),
                    user_id: format!("user_{i}"),
                    action: "upload".into(),
                    status: AuditStatus::Failure,
                    resource_id: None,
                    metadata: Some(serde_json::json!({"error": "too large"})),
                })
                .collect(),
            ..AnalyticsSummary::default()
        };

        let overview = Overview::from_summary(&summary);
        assert_eq!(overview.success_rate, "66.7%");
        assert_eq!(overview.actions_by_type, vec![("auth failure".to_string(), 3)]);
        assert_eq!(overview.top_users.len(), TOP_USERS_SHOWN);
        assert_eq!(overview.top_users[0].rank, 1);
        assert_eq!(overview.top_users[0].user.chars().count(), TOP_USER_ID_CHARS + 3);
        assert_eq!(overview.recent_failures.len(), RECENT_FAILURES_SHOWN);
        assert!(
            overview.recent_failures[0]
                .metadata
                .as_deref()
                .is_some_and(|m| m.contains("too large"))
        );
    }

    #[test]
    fn overview_of_query_analytics_shows_questions() {
        let summary = AnalyticsSummary {
            period_days: 30,
            total_queries: Some(120),
            top_questions: vec![TopQuestion {
                question: "What is the return policy?".into(),
                count: 14,
            }],
            refusal_rate: Some(4.31),
            ..AnalyticsSummary::default()
        };
        let overview = Overview::from_summary(&summary);
        assert!(overview.actions_by_type.is_empty());
        assert_eq!(overview.total_queries, Some(120));
        assert_eq!(overview.refusal_rate.as_deref(), Some("4.3%"));
        assert_eq!(overview.top_questions[0].1, 14);
    }
}
