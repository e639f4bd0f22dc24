use fops_views::{Notice, UploadView};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::UploadArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;
use crate::ui;

#[derive(Debug, Serialize)]
struct UploadResult {
    doc_id: String,
    file: String,
    size_bytes: usize,
    org_id: String,
    manual_name: String,
    version: String,
    reindexed: bool,
}

pub async fn run(args: &UploadArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = UploadView::new(ctx.client, ctx.session, &ctx.config.upload);

    let metadata = view.metadata_mut();
    if let Some(org_id) = &args.org_id {
        metadata.org_id.clone_from(org_id);
    }
    if let Some(manual_name) = &args.manual_name {
        metadata.manual_name.clone_from(manual_name);
    }
    if let Some(version) = &args.version {
        metadata.version.clone_from(version);
    }

    let (file, size_bytes) = view
        .select_file(&args.file)
        .map(|file| (file.name().to_string(), file.size()))
        .map_err(|notice| anyhow::anyhow!("{notice}"))?;

    let spinner = Spinner::start(&format!("Uploading {file}..."));
    let notice = view
        .upload()
        .await
        .ok_or_else(|| anyhow::anyhow!("admin upload: nothing to upload"))?;
    if !notice.is_success() {
        spinner.fail(&notice.message);
        anyhow::bail!("{notice}");
    }
    spinner.done();
    ui::note(&notice.message);

    let doc_id = view
        .doc_id()
        .ok_or_else(|| anyhow::anyhow!("admin upload: server returned no document id"))?
        .to_string();

    let reindexed = if args.reindex {
        let spinner = Spinner::start("Re-indexing...");
        let notice = view.reindex().await;
        spinner.done();
        require_reindexed(notice, &doc_id)?;
        true
    } else {
        false
    };

    let metadata = view.metadata();
    output(
        &UploadResult {
            doc_id,
            file,
            size_bytes,
            org_id: metadata.org_id.clone(),
            manual_name: metadata.manual_name.clone(),
            version: metadata.version.clone(),
            reindexed,
        },
        flags.format,
    )
}

/// A requested re-index that did not succeed fails the command, like
/// `fops admin reindex` does. The upload itself is kept, so the error says
/// how to retry.
fn require_reindexed(notice: Option<Notice>, doc_id: &str) -> anyhow::Result<()> {
    match notice {
        Some(notice) if notice.is_success() => {
            ui::note(&notice.message);
            Ok(())
        }
        Some(notice) => anyhow::bail!(
            "{notice} Document {doc_id} was uploaded; retry with `fops admin reindex {doc_id}`."
        ),
        None => anyhow::bail!("admin upload: re-index of {doc_id} did not start"),
    }
}
