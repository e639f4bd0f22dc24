//! Analytics view against a wiremock backend.

use std::time::Duration;

use fops_auth::{GateDecision, StaticSession};
use fops_client::ApiClient;
use fops_config::AnalyticsSource;
use fops_core::AuthIdentity;
use fops_core::enums::{AuditAction, AuditStatus, Role, TimeWindow};
use fops_views::AnalyticsView;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(role: Role) -> StaticSession {
    StaticSession::signed_in(
        AuthIdentity {
            user_id: "user_1".into(),
            role,
            org_id: None,
            org_slug: None,
        },
        "tok".into(),
    )
}

fn view(server: &MockServer, role: Role) -> AnalyticsView<StaticSession> {
    let client = ApiClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    AnalyticsView::new(client, session(role), AnalyticsSource::AuditSummary)
}

fn summary(days: u32) -> Value {
    json!({
        "period_days": days,
        "total_actions": 4,
        "actions_by_type": {"upload": 3, "reindex": 1},
        "status_summary": {"success": 3, "failure": 1, "denied": 0},
        "success_rate": 75.0,
        "top_users": [{"user_id": "user_1", "action_count": 4}],
        "recent_failures": []
    })
}

fn logs() -> Value {
    json!({
        "logs": [{
            "id": "log_1",
            "timestamp": "2025-01-01T10:00:00Z",
            "user_id": "user_1",
            "action": "upload",
            "resource_type": "document",
            "resource_id": "doc_1",
            "status": "success",
            "ip_address": "10.0.0.1"
        }],
        "total": 1
    })
}

async fn mount_window(server: &MockServer, days: &str) {
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs/summary"))
        .and(query_param("days", days))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary(days.parse().unwrap())))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs"))
        .and(query_param("days", days))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(logs()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn window_change_refreshes_once_with_new_days() {
    let server = MockServer::start().await;
    mount_window(&server, "7").await;
    mount_window(&server, "30").await;

    let mut view = view(&server, Role::Admin);
    assert!(matches!(view.enter().await, GateDecision::Render(_)));
    assert_eq!(view.summary().map(|s| s.period_days), Some(7));

    view.set_days(TimeWindow::Month).await;
    assert_eq!(view.summary().map(|s| s.period_days), Some(30));
    assert_eq!(view.logs().len(), 1);
    assert_eq!(view.total_logs(), 1);
    assert!(view.error().is_none());
    assert!(!view.is_loading());

    // Same value again: not a change.
    view.set_days(TimeWindow::Month).await;
}

#[tokio::test]
async fn filters_are_sent_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary(7)))
        .expect(3)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs"))
        .and(query_param("action", "reindex"))
        .and(query_param("status", "failure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"logs": [], "total": 0})))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(logs()))
        .expect(2)
        .mount(&server)
        .await;

    let mut view = view(&server, Role::Admin);
    view.enter().await;
    assert_eq!(view.logs().len(), 1);

    view.set_action(Some(AuditAction::Reindex)).await;
    view.set_status(Some(AuditStatus::Failure)).await;
    assert!(view.logs().is_empty());
}

#[tokio::test]
async fn failed_summary_keeps_logs_and_sets_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs/summary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(logs()))
        .mount(&server)
        .await;

    let mut view = view(&server, Role::Admin);
    view.enter().await;

    assert!(view.summary().is_none());
    assert_eq!(view.logs().len(), 1);
    assert_eq!(view.error(), Some("Failed to fetch summary"));
}

#[tokio::test]
async fn member_is_redirected_and_nothing_is_fetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary(7)))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = view(&server, Role::Member);
    assert!(matches!(view.enter().await, GateDecision::Redirect(_)));
    view.set_days(TimeWindow::Day).await;
}

#[tokio::test]
async fn export_always_requests_ninety_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs/export"))
        .and(query_param("days", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "id\nlog_1\n"})))
        .expect(1)
        .mount(&server)
        .await;

    let view = view(&server, Role::Admin);
    let file = view.export_logs().await.unwrap();

    let today = chrono::Utc::now().date_naive();
    assert_eq!(file.file_name, format!("audit_logs_{}.csv", today.format("%Y-%m-%d")));
    assert_eq!(file.content, "id\nlog_1\n");
}

#[tokio::test]
async fn export_failure_becomes_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/audit-logs/export"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let notice = view(&server, Role::Admin).export_logs().await.unwrap_err();
    assert_eq!(notice.message, "Export failed: Failed to export logs");
}
