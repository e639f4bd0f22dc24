use fops_views::UploadView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::ReindexArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct ReindexResult {
    doc_id: String,
    reindexed: bool,
}

pub async fn run(args: &ReindexArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = UploadView::new(ctx.client, ctx.session, &ctx.config.upload);
    view.set_doc_id(args.doc_id.as_str());

    let spinner = Spinner::start("Re-indexing...");
    let notice = view
        .reindex()
        .await
        .ok_or_else(|| anyhow::anyhow!("admin reindex: no document to re-index"))?;
    if !notice.is_success() {
        spinner.fail(&notice.message);
        anyhow::bail!("{notice}");
    }
    spinner.done();

    output(
        &ReindexResult {
            doc_id: args.doc_id.clone(),
            reindexed: true,
        },
        flags.format,
    )
}
