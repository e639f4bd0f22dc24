mod analytics;
mod export;
mod reindex;
mod upload;

use fops_auth::AuthGate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::gate;
use crate::context::AppContext;

/// Handle `fops admin <subcommand>`. Every admin command sits behind the admin gate.
pub async fn handle(
    action: &AdminCommands,
    ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = gate::require(AuthGate::admin(&ctx.session))?;
    tracing::debug!(user_id = %identity.user_id, "admin gate passed");

    match action {
        AdminCommands::Upload(args) => upload::run(args, ctx, flags).await,
        AdminCommands::Reindex(args) => reindex::run(args, ctx, flags).await,
        AdminCommands::Analytics(args) => analytics::run(args, ctx, flags).await,
        AdminCommands::Export(args) => export::run(args, ctx, flags).await,
    }
}
