use fops_auth::token_store::{TokenSource, detect_token_source};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct LogoutResult {
    signed_out: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    fops_auth::logout()?;

    // Only the env var can survive a logout.
    let signed_out = detect_token_source() != Some(TokenSource::Env);
    if !signed_out {
        ui::note("FOPS_AUTH__TOKEN is still set; unset it to sign out completely.");
    }
    output(&LogoutResult { signed_out }, flags.format)
}
