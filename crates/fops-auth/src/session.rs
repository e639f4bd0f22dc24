//! Session context injected into views.
//!
//! Views never reach for a global session. They take any [`AuthSession`]
//! and ask it for the current identity and a bearer token per request.

use std::future::Future;

use fops_config::ClerkConfig;
use fops_core::AuthIdentity;

use crate::claims::FopsClaims;
use crate::error::AuthError;
use crate::refresh::EXPIRY_BUFFER_SECS;

/// Identity provider state as seen by a view.
pub trait AuthSession: Send + Sync {
    /// Whether the provider has finished loading its state.
    fn is_loaded(&self) -> bool;

    fn is_signed_in(&self) -> bool;

    /// The signed-in user, if any.
    fn user(&self) -> Option<&AuthIdentity>;

    /// Session token for the `Authorization: Bearer` header.
    ///
    /// `Ok(None)` when signed out.
    fn get_token(&self) -> impl Future<Output = Result<Option<String>, AuthError>> + Send;
}

/// Session backed by a Clerk JWT from the token store.
#[derive(Debug, Clone, Default)]
pub struct ClerkSession {
    claims: Option<FopsClaims>,
    identity: Option<AuthIdentity>,
}

impl ClerkSession {
    /// Resolve the stored token into a session.
    ///
    /// A missing, expired, or near-expiry token yields a signed-out session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when JWKS validation fails for a reason other than
    /// expiry (network, malformed token).
    pub async fn load(clerk: &ClerkConfig) -> Result<Self, AuthError> {
        let claims = crate::refresh::check_stored_token(clerk).await?;
        Ok(claims.map_or_else(Self::signed_out, Self::from_claims))
    }

    #[must_use]
    pub fn from_claims(claims: FopsClaims) -> Self {
        Self {
            identity: Some(claims.to_identity()),
            claims: Some(claims),
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn claims(&self) -> Option<&FopsClaims> {
        self.claims.as_ref()
    }
}

impl AuthSession for ClerkSession {
    fn is_loaded(&self) -> bool {
        true
    }

    fn is_signed_in(&self) -> bool {
        self.claims.is_some()
    }

    fn user(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    async fn get_token(&self) -> Result<Option<String>, AuthError> {
        match &self.claims {
            None => Ok(None),
            Some(claims) if claims.is_near_expiry(EXPIRY_BUFFER_SECS) => {
                Err(AuthError::TokenExpired)
            }
            Some(claims) => Ok(Some(claims.raw_jwt.clone())),
        }
    }
}

/// Fixed session state, for tests and for callers that already hold a token.
#[derive(Debug, Clone)]
pub struct StaticSession {
    loaded: bool,
    identity: Option<AuthIdentity>,
    token: Option<String>,
}

impl StaticSession {
    #[must_use]
    pub const fn signed_in(identity: AuthIdentity, token: String) -> Self {
        Self {
            loaded: true,
            identity: Some(identity),
            token: Some(token),
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            loaded: true,
            identity: None,
            token: None,
        }
    }

    /// Provider still initializing.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            loaded: false,
            identity: None,
            token: None,
        }
    }
}

impl AuthSession for StaticSession {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn is_signed_in(&self) -> bool {
        self.loaded && self.identity.is_some()
    }

    fn user(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    async fn get_token(&self) -> Result<Option<String>, AuthError> {
        Ok(self.token.clone())
    }
}
