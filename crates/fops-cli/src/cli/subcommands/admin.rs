use std::path::PathBuf;

use clap::{Args, Subcommand};
use fops_core::enums::{AnalyticsTab, AuditAction, AuditStatus, TimeWindow};

/// Admin console commands. All of them require the `admin` role.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Upload a PDF manual.
    Upload(UploadArgs),
    /// Re-index a previously uploaded document.
    Reindex(ReindexArgs),
    /// Usage overview or audit-log listing.
    Analytics(AnalyticsArgs),
    /// Download the last 90 days of audit logs as CSV.
    Export(ExportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// PDF file to upload.
    pub file: PathBuf,
    /// Organization id (defaults to `upload.org_id`).
    #[arg(long)]
    pub org_id: Option<String>,
    /// Manual name (defaults to `upload.manual_name`).
    #[arg(long)]
    pub manual_name: Option<String>,
    /// Manual version (defaults to `upload.version`).
    #[arg(long)]
    pub version: Option<String>,
    /// Re-index right after a successful upload.
    #[arg(long)]
    pub reindex: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ReindexArgs {
    pub doc_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyticsArgs {
    /// Tab to show: overview or logs.
    #[arg(default_value = "overview", value_parser = parse_tab)]
    pub tab: AnalyticsTab,
    /// Look-back window in days: 1, 7, 30 or 90.
    #[arg(long, default_value = "7", value_parser = parse_window)]
    pub days: TimeWindow,
    /// Only this action type.
    #[arg(long, value_parser = parse_action)]
    pub action: Option<AuditAction>,
    /// Only this status.
    #[arg(long, value_parser = parse_status)]
    pub status: Option<AuditStatus>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Directory for the CSV (defaults to `general.export_dir`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

fn parse_tab(value: &str) -> Result<AnalyticsTab, String> {
    match value {
        "overview" => Ok(AnalyticsTab::Overview),
        "logs" => Ok(AnalyticsTab::Logs),
        other => Err(format!("unknown tab '{other}' (expected overview or logs)")),
    }
}

fn parse_window(value: &str) -> Result<TimeWindow, String> {
    let days: u32 = value.parse().map_err(|_| format!("'{value}' is not a number of days"))?;
    TimeWindow::from_days(days).map_err(|_| format!("unsupported window {days} (expected 1, 7, 30 or 90)"))
}

fn parse_action(value: &str) -> Result<AuditAction, String> {
    value.parse().map_err(|e: fops_core::CoreError| e.to_string())
}

fn parse_status(value: &str) -> Result<AuditStatus, String> {
    value.parse().map_err(|e: fops_core::CoreError| e.to_string())
}
