use fops_config::AnalyticsSource;
use fops_core::entities::{AnalyticsSummary, AuditLogPage, AuditLogQuery, ExportPayload};
use serde::de::DeserializeOwned;

use crate::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, read_json};

impl ApiClient {
    /// `GET /admin/audit-logs?days=&limit=&action=&status=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or an
    /// unexpected body.
    pub async fn audit_logs(
        &self,
        token: &str,
        query: &AuditLogQuery,
    ) -> Result<AuditLogPage, ApiError> {
        self.get_json(token, &format!("/admin/audit-logs?{}", query.to_query_string()))
            .await
    }

    /// `GET /admin/audit-logs/summary?days=`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::audit_logs`].
    pub async fn audit_summary(&self, token: &str, days: u32) -> Result<AnalyticsSummary, ApiError> {
        self.get_json(token, &format!("/admin/audit-logs/summary?days={days}"))
            .await
    }

    /// `GET /admin/analytics?days=`, the query-analytics overview
    /// (top questions, refusal rate).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::audit_logs`].
    pub async fn query_analytics(
        &self,
        token: &str,
        days: u32,
    ) -> Result<AnalyticsSummary, ApiError> {
        self.get_json(token, &format!("/admin/analytics?days={days}"))
            .await
    }

    /// Overview summary from whichever endpoint `source` names.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::audit_logs`].
    pub async fn analytics_summary(
        &self,
        token: &str,
        source: AnalyticsSource,
        days: u32,
    ) -> Result<AnalyticsSummary, ApiError> {
        match source {
            AnalyticsSource::AuditSummary => self.audit_summary(token, days).await,
            AnalyticsSource::QueryAnalytics => self.query_analytics(token, days).await,
        }
    }

    /// `GET /admin/audit-logs/export?days=`. Returns the CSV text.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::audit_logs`].
    pub async fn export_logs(&self, token: &str, days: u32) -> Result<String, ApiError> {
        let payload: ExportPayload = self
            .get_json(token, &format!("/admin/audit-logs/export?days={days}"))
            .await?;
        Ok(payload.content)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path_and_query: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(path = path_and_query, "GET");
        let resp = self
            .http
            .get(self.url(path_and_query))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }
}
