//! # fops-auth
//!
//! Who is using the FranchiseOps client, and may they see the admin console.
//!
//! A session token is obtained through the hosted Clerk pages
//! ([`browser_flow`]) or minted headlessly ([`api_key`]), checked against
//! JWKS when a secret key is configured ([`jwks`]), and kept between runs by
//! [`token_store`]. Views never touch any of that: they receive an
//! [`AuthSession`] and ask the [`AuthGate`] whether to render.

pub mod api_key;
pub mod browser_flow;
pub mod claims;
pub mod error;
pub mod gate;
pub mod jwks;
pub mod refresh;
pub mod session;
pub mod token_store;

pub use claims::FopsClaims;
pub use error::AuthError;
pub use gate::{AuthGate, GateDecision};
pub use session::{AuthSession, ClerkSession, StaticSession};

/// Sign out locally: forget the stored session token.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()?;
    tracing::info!("stored session cleared");
    Ok(())
}
