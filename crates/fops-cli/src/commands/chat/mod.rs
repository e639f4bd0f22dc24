mod ask;
mod repl;

use fops_auth::AuthGate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::commands::shared::gate;
use crate::context::AppContext;

/// Handle `fops chat [ask|repl]`. A bare `fops chat` opens the REPL.
pub async fn handle(
    action: Option<&ChatCommands>,
    ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    gate::require(AuthGate::signed_in(&ctx.session))?;

    match action {
        Some(ChatCommands::Ask(args)) => ask::run(args, ctx, flags).await,
        Some(ChatCommands::Repl) | None => repl::run(ctx).await,
    }
}
