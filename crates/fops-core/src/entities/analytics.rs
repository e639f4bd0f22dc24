use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AuditStatus;

/// Aggregate usage metrics for the analytics overview.
///
/// One type covers both backend shapes: the audit summary
/// (`/admin/audit-logs/summary`, with `actions_by_type` and `top_users`) and
/// the query analytics endpoint (`/admin/analytics`, with `top_questions` and
/// `refusal_rate`). Fields absent from a given backend deserialize to their
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub period_days: u32,
    #[serde(default)]
    pub total_actions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_queries: Option<u64>,
    #[serde(default)]
    pub actions_by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub status_summary: StatusSummary,
    /// Percentage in `0.0..=100.0`.
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub top_users: Vec<TopUser>,
    #[serde(default)]
    pub recent_failures: Vec<RecentFailure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_questions: Vec<TopQuestion>,
    /// Percentage in `0.0..=100.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal_rate: Option<f64>,
}

impl AnalyticsSummary {
    /// Whether this snapshot came from the query-analytics backend.
    ///
    /// The overview then shows the top-questions leaderboard and refusal
    /// rate in place of the per-action breakdown.
    #[must_use]
    pub fn is_query_analytics(&self) -> bool {
        self.actions_by_type.is_empty()
            && (!self.top_questions.is_empty() || self.refusal_rate.is_some())
    }
}

/// Success/failure/denied counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusSummary {
    #[serde(default)]
    pub success: u64,
    #[serde(default)]
    pub failure: u64,
    #[serde(default)]
    pub denied: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopUser {
    pub user_id: String,
    pub action_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopQuestion {
    #[serde(alias = "query")]
    pub question: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecentFailure {
    pub timestamp: String,
    pub user_id: String,
    pub action: String,
    pub status: AuditStatus,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_summary_shape_is_not_query_analytics() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{
                "period_days": 7,
                "total_actions": 12,
                "actions_by_type": {"upload": 2, "chat_query": 10},
                "status_summary": {"success": 11, "failure": 1, "denied": 0},
                "success_rate": 91.7,
                "top_users": [{"user_id": "user_1", "action_count": 12}],
                "recent_failures": []
            }"#,
        )
        .unwrap();
        assert!(!summary.is_query_analytics());
        assert_eq!(summary.actions_by_type["chat_query"], 10);
    }

    #[test]
    fn variant_shape_is_query_analytics() {
        let summary: AnalyticsSummary = serde_json::from_str(
            r#"{
                "total_queries": 40,
                "refusal_rate": 12.5,
                "top_questions": [{"query": "What is the return policy?", "count": 9}]
            }"#,
        )
        .unwrap();
        assert!(summary.is_query_analytics());
        assert_eq!(summary.total_queries, Some(40));
        assert_eq!(summary.top_questions[0].question, "What is the return policy?");
    }
}
