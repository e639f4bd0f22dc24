//! Backend payload fixtures checked against the generated contract schemas
//! and parsed into the view-model types.

use fops_core::entities::{
    AnalyticsSummary, AuditLogPage, ChatRequest, ChatResponse, ExportPayload, UploadReceipt,
};
use fops_core::enums::AuditStatus;
use fops_core::schema::ContractSchemas;
use pretty_assertions::assert_eq;
use serde_json::json;

fn schemas() -> ContractSchemas {
    ContractSchemas::new()
}

#[test]
fn chat_request_matches_schema() {
    let request = ChatRequest {
        question: "What is the return policy?".into(),
        manual_name: "OpsManual".into(),
    };
    let value = serde_json::to_value(&request).unwrap();
    schemas().validate("chat_request", &value).unwrap();
    assert_eq!(
        value,
        json!({"question": "What is the return policy?", "manual_name": "OpsManual"})
    );
}

#[test]
fn chat_response_fixture_validates_and_parses() {
    let fixture = json!({
        "answer": "Returns within 30 days.",
        "citations": [{"doc": "OpsManual", "pages": [12], "chunk_id": "ck_88"}],
        "refused": false
    });
    schemas().validate("chat_response", &fixture).unwrap();

    let resp: ChatResponse = serde_json::from_value(fixture).unwrap();
    assert_eq!(resp.citations[0].chip_label(), "OpsManual p.12");
    assert_eq!(resp.citations[0].chunk_id.as_deref(), Some("ck_88"));
}

#[test]
fn audit_log_page_fixture_validates_and_parses() {
    let fixture = json!({
        "logs": [
            {
                "id": "log_1",
                "timestamp": "2025-05-02T09:30:00Z",
                "user_id": "user_2abcdefghijklmnop",
                "action": "upload",
                "resource_type": "document",
                "resource_id": "doc_1234567890abc",
                "status": "success",
                "metadata": {"manual_name": "OpsManual"},
                "ip_address": "10.0.0.1"
            },
            {
                "id": "log_2",
                "timestamp": "2025-05-02T09:31:00",
                "user_id": "user_3",
                "action": "permission_denied",
                "resource_type": null,
                "resource_id": null,
                "status": "denied",
                "metadata": null,
                "ip_address": null
            }
        ],
        "total": 2
    });
    schemas().validate("audit_log_page", &fixture).unwrap();

    let page: AuditLogPage = serde_json::from_value(fixture).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.logs[1].status, AuditStatus::Denied);
    assert!(page.logs[1].recorded_at().is_some());
}

#[test]
fn unknown_audit_status_fails_validation() {
    let fixture = json!({
        "id": "log_1",
        "timestamp": "2025-05-02T09:30:00Z",
        "user_id": "user_1",
        "action": "upload",
        "status": "exploded"
    });
    assert!(schemas().validate("audit_log_entry", &fixture).is_err());
}

#[test]
fn analytics_summary_fixture_validates() {
    let fixture = json!({
        "period_days": 30,
        "total_actions": 3,
        "actions_by_type": {"upload": 1, "reindex": 1, "auth_failure": 1},
        "status_summary": {"success": 2, "failure": 1, "denied": 0},
        "success_rate": 66.7,
        "top_users": [{"user_id": "user_1", "action_count": 3}],
        "recent_failures": [{
            "timestamp": "2025-05-01T00:00:00Z",
            "user_id": "user_1",
            "action": "auth_failure",
            "status": "failure",
            "resource_id": null,
            "metadata": {"reason": "expired token"}
        }]
    });
    schemas().validate("analytics_summary", &fixture).unwrap();
    let summary: AnalyticsSummary = serde_json::from_value(fixture).unwrap();
    assert_eq!(summary.status_summary.failure, 1);
    assert_eq!(summary.recent_failures.len(), 1);
}

#[test]
fn upload_and_export_fixtures_parse() {
    let receipt: UploadReceipt = serde_json::from_value(json!({"doc_id": "doc_42"})).unwrap();
    assert_eq!(receipt.doc_id, "doc_42");

    let export: ExportPayload =
        serde_json::from_value(json!({"content": "id,action\nlog_1,upload\n"})).unwrap();
    assert!(export.content.starts_with("id,action"));
}
