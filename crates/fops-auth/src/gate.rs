//! Client-side route gating.
//!
//! Advisory only. Every admin endpoint authorizes again on the server.

use fops_core::{AuthIdentity, Route};

use crate::session::AuthSession;

/// Outcome of running the gate for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity provider has not loaded yet. Render nothing.
    Loading,
    Redirect(Route),
    Render(AuthIdentity),
}

impl GateDecision {
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }
}

pub struct AuthGate;

impl AuthGate {
    /// Gate an admin view. Signed-out and non-admin users go to [`Route::Home`].
    #[must_use]
    pub fn admin<S: AuthSession>(session: &S) -> GateDecision {
        match Self::signed_in_identity(session) {
            Err(decision) => {
                if matches!(decision, GateDecision::Redirect(_)) {
                    tracing::debug!("admin view requested while signed out");
                    return GateDecision::Redirect(Route::Home);
                }
                decision
            }
            Ok(identity) if identity.is_admin() => GateDecision::Render(identity),
            Ok(identity) => {
                tracing::warn!(user_id = %identity.user_id, role = %identity.role, "non-admin redirected from admin view");
                GateDecision::Redirect(Route::Home)
            }
        }
    }

    /// Gate a view that only needs a signed-in user.
    #[must_use]
    pub fn signed_in<S: AuthSession>(session: &S) -> GateDecision {
        match Self::signed_in_identity(session) {
            Ok(identity) => GateDecision::Render(identity),
            Err(decision) => decision,
        }
    }

    fn signed_in_identity<S: AuthSession>(session: &S) -> Result<AuthIdentity, GateDecision> {
        if !session.is_loaded() {
            return Err(GateDecision::Loading);
        }
        match session.user() {
            Some(identity) if session.is_signed_in() => Ok(identity.clone()),
            _ => Err(GateDecision::Redirect(Route::SignIn)),
        }
    }
}
