use fops_auth::GateDecision;
use fops_core::{AuthIdentity, Route};

/// Turn a gate decision into the identity to proceed with, or an error that
/// names the command playing the redirect target's part.
pub fn require(decision: GateDecision) -> anyhow::Result<AuthIdentity> {
    match decision {
        GateDecision::Render(identity) => Ok(identity),
        GateDecision::Loading => anyhow::bail!("session is still loading; try again"),
        GateDecision::Redirect(Route::SignIn | Route::SignUp) => {
            anyhow::bail!("not signed in; run `fops auth login`")
        }
        GateDecision::Redirect(route) => anyhow::bail!(
            "admin role required (redirected to {route}); ask an administrator or run `fops chat`"
        ),
    }
}
