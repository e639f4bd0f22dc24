use fops_core::enums::AnalyticsTab;
use fops_views::AnalyticsView;
use fops_views::present::{EMPTY_LOGS_HINT, EMPTY_LOGS_MESSAGE, LogRow, Overview};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::AnalyticsArgs;
use crate::commands::shared::gate;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;
use crate::ui;

/// Handle `fops admin analytics`.
pub async fn run(args: &AnalyticsArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let mut view = AnalyticsView::new(ctx.client, ctx.session, ctx.config.api.analytics_source)
        .with_limit(limit)
        .with_filters(args.days, args.action, args.status);
    view.set_tab(args.tab);

    let spinner = Spinner::start(&format!("Loading analytics ({})...", args.days));
    let decision = view.enter().await;
    spinner.done();
    gate::require(decision)?;

    if let Some(banner) = view.error() {
        ui::note(&format!("warning: {banner}"));
    }

    match view.tab() {
        AnalyticsTab::Overview => {
            let Some(summary) = view.summary() else {
                anyhow::bail!("{}", view.error().unwrap_or("Failed to fetch summary"));
            };
            output(&Overview::from_summary(summary), flags.format)
        }
        AnalyticsTab::Logs => {
            let rows: Vec<LogRow> = view.logs().iter().map(LogRow::from).collect();
            if rows.is_empty() && view.error().is_none() {
                ui::note(EMPTY_LOGS_MESSAGE);
                ui::note(EMPTY_LOGS_HINT);
            } else {
                ui::note(&format!("Showing {} of {} entries", rows.len(), view.total_logs()));
            }
            output(&rows, flags.format)
        }
    }
}
