use std::sync::{Arc, OnceLock};

use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::FopsClaims;
use crate::error::AuthError;

/// Keys fetched from Clerk, cached for the life of the process. The first
/// secret key seen wins; a CLI run only ever has one.
static PROVIDER: OnceLock<Arc<MemoryCacheJwksProvider>> = OnceLock::new();

fn provider(secret_key: &str) -> Arc<MemoryCacheJwksProvider> {
    Arc::clone(PROVIDER.get_or_init(|| {
        let clerk = Clerk::new(ClerkConfiguration::new(
            None,
            None,
            Some(secret_key.to_owned()),
            None,
        ));
        Arc::new(MemoryCacheJwksProvider::new(clerk))
    }))
}

/// Check the signature and expiry of a Clerk session token, then read the
/// claims from its payload.
///
/// # Errors
///
/// Returns `AuthError::JwksValidation` when `clerk-rs` rejects the token or
/// cannot reach the JWKS endpoint, and `AuthError::InvalidToken` when the
/// payload lacks `sub` or `exp`.
pub async fn validate(jwt: &str, secret_key: &str) -> Result<FopsClaims, AuthError> {
    let verified = validate_jwt(jwt, provider(secret_key))
        .await
        .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

    let mut claims = FopsClaims::from_unverified(jwt)?;
    // Clerk nests the active organization; prefer it over flat org_* claims.
    if let Some(org) = verified.org {
        claims.org_id = Some(org.id);
        claims.org_slug = Some(org.slug);
    }
    tracing::debug!(user_id = %claims.user_id, "session token verified against JWKS");
    Ok(claims)
}
