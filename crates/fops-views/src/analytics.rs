//! Admin analytics view: overview and logs tabs over one set of filters.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use fops_auth::{AuthGate, AuthSession, GateDecision};
use fops_client::ApiClient;
use fops_config::AnalyticsSource;
use fops_core::entities::{AnalyticsSummary, AuditLogEntry, AuditLogQuery};
use fops_core::enums::{AnalyticsTab, AuditAction, AuditStatus, TimeWindow};

use crate::error::ViewError;
use crate::notice::Notice;

pub const DEFAULT_LOG_LIMIT: u32 = 50;

/// Export always covers this window, whatever the filter says.
pub const EXPORT_WINDOW: TimeWindow = TimeWindow::Quarter;

/// `audit_logs_YYYY-MM-DD.csv`
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("audit_logs_{}.csv", date.format("%Y-%m-%d"))
}

/// CSV download produced by [`AnalyticsView::export_logs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

impl ExportFile {
    /// Write into `dir`, returning the full path.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn save_in(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

pub struct AnalyticsView<S> {
    client: ApiClient,
    session: S,
    source: AnalyticsSource,
    tab: AnalyticsTab,
    window: TimeWindow,
    action: Option<AuditAction>,
    status: Option<AuditStatus>,
    limit: u32,
    summary: Option<AnalyticsSummary>,
    logs: Vec<AuditLogEntry>,
    total_logs: u64,
    is_loading: bool,
    error: Option<String>,
}

impl<S: AuthSession> AnalyticsView<S> {
    #[must_use]
    pub const fn new(client: ApiClient, session: S, source: AnalyticsSource) -> Self {
        Self {
            client,
            session,
            source,
            tab: AnalyticsTab::Overview,
            window: TimeWindow::Week,
            action: None,
            status: None,
            limit: DEFAULT_LOG_LIMIT,
            summary: None,
            logs: Vec::new(),
            total_logs: 0,
            is_loading: false,
            error: None,
        }
    }

    /// Log page size. Not a user-facing filter, so changing it does not refresh.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Initial filters, applied without a refresh. The next [`Self::enter`]
    /// loads data for them.
    #[must_use]
    pub const fn with_filters(
        mut self,
        window: TimeWindow,
        action: Option<AuditAction>,
        status: Option<AuditStatus>,
    ) -> Self {
        self.window = window;
        self.action = action;
        self.status = status;
        self
    }

    #[must_use]
    pub const fn tab(&self) -> AnalyticsTab {
        self.tab
    }

    pub const fn set_tab(&mut self, tab: AnalyticsTab) {
        self.tab = tab;
    }

    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        self.window
    }

    #[must_use]
    pub const fn action(&self) -> Option<AuditAction> {
        self.action
    }

    #[must_use]
    pub const fn status(&self) -> Option<AuditStatus> {
        self.status
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&AnalyticsSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }

    #[must_use]
    pub const fn total_logs(&self) -> u64 {
        self.total_logs
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Error banner text, if the last refresh failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current log filters as a query.
    #[must_use]
    pub const fn log_query(&self) -> AuditLogQuery {
        AuditLogQuery {
            window: self.window,
            action: self.action,
            status: self.status,
            limit: self.limit,
        }
    }

    /// Run the admin gate and, when it passes, load both tabs.
    pub async fn enter(&mut self) -> GateDecision {
        let decision = AuthGate::admin(&self.session);
        if decision.is_render() {
            self.refresh().await;
        }
        decision
    }

    pub async fn set_days(&mut self, window: TimeWindow) {
        if self.window != window {
            self.window = window;
            self.refresh().await;
        }
    }

    pub async fn set_action(&mut self, action: Option<AuditAction>) {
        if self.action != action {
            self.action = action;
            self.refresh().await;
        }
    }

    pub async fn set_status(&mut self, status: Option<AuditStatus>) {
        if self.status != status {
            self.status = status;
            self.refresh().await;
        }
    }

    /// Fetch the summary and the log page together.
    ///
    /// Each request fills its own fields. A failure in one keeps the
    /// other's result and sets the error banner. Skipped when the admin gate
    /// does not pass.
    pub async fn refresh(&mut self) {
        if !AuthGate::admin(&self.session).is_render() {
            tracing::debug!("analytics refresh skipped: admin gate closed");
            return;
        }

        self.is_loading = true;
        self.error = None;

        let query = self.log_query();
        let days = self.window.days();
        let (summary, logs) = match crate::require_token(&self.session).await {
            Ok(token) => {
                tokio::join!(
                    async {
                        self.client
                            .analytics_summary(&token, self.source, days)
                            .await
                            .map_err(ViewError::from)
                    },
                    async {
                        self.client
                            .audit_logs(&token, &query)
                            .await
                            .map_err(ViewError::from)
                    },
                )
            }
            Err(error) => {
                let message = error.to_string();
                self.error = Some(message);
                self.is_loading = false;
                tracing::warn!(%error, "analytics refresh without a session token");
                return;
            }
        };

        match summary {
            Ok(summary) => self.summary = Some(summary),
            Err(error) => {
                tracing::warn!(%error, days, "summary fetch failed");
                self.error = Some(error.describe("Failed to fetch summary"));
            }
        }
        match logs {
            Ok(page) => {
                self.total_logs = page.total;
                self.logs = page.logs;
            }
            Err(error) => {
                tracing::warn!(%error, days, "audit log fetch failed");
                self.error = Some(error.describe("Failed to fetch logs"));
            }
        }
        self.is_loading = false;
    }

    /// Download the last 90 days of audit logs as CSV.
    ///
    /// # Errors
    ///
    /// Returns a failure [`Notice`] `"Export failed: …"`.
    pub async fn export_logs(&self) -> Result<ExportFile, Notice> {
        let result = async {
            let token = crate::require_token(&self.session).await?;
            Ok::<_, ViewError>(self.client.export_logs(&token, EXPORT_WINDOW.days()).await?)
        }
        .await;

        match result {
            Ok(content) => Ok(ExportFile {
                file_name: export_filename(chrono::Utc::now().date_naive()),
                content,
            }),
            Err(error) => {
                tracing::warn!(%error, "audit log export failed");
                Err(Notice::failure(format!(
                    "Export failed: {}",
                    error.describe("Failed to export logs")
                )))
            }
        }
    }
}
