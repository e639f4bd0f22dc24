use std::path::PathBuf;

use anyhow::Context;
use fops_views::AnalyticsView;
use fops_views::analytics::EXPORT_WINDOW;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::ExportArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct ExportResult {
    path: String,
    days: u32,
    bytes: usize,
}

/// Handle `fops admin export`: the last 90 days as CSV, whatever filters are set elsewhere.
pub async fn run(args: &ExportArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.general.export_dir));
    let view = AnalyticsView::new(ctx.client, ctx.session, ctx.config.api.analytics_source);

    let spinner = Spinner::start("Exporting audit logs...");
    let file = match view.export_logs().await {
        Ok(file) => file,
        Err(notice) => {
            spinner.fail(&notice.message);
            anyhow::bail!("{notice}");
        }
    };
    spinner.done();

    let path = file
        .save_in(&dir)
        .with_context(|| format!("failed to write {} into {}", file.file_name, dir.display()))?;

    output(
        &ExportResult {
            path: path.display().to_string(),
            days: EXPORT_WINDOW.days(),
            bytes: file.content.len(),
        },
        flags.format,
    )
}
