use fops_config::ClerkConfig;

use crate::claims::FopsClaims;
use crate::error::AuthError;

/// Tokens this close to expiry are treated as signed out.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Check if a stored token is still usable.
///
/// With a Clerk secret key configured the token is validated against JWKS;
/// without one the payload is decoded unverified (the backend verifies every
/// request anyway).
///
/// Returns `Ok(None)` if no token is stored or it is expired/near-expiry.
///
/// # Errors
///
/// Returns `AuthError` if validation encounters a network or parsing error
/// (distinct from an expired token, which returns `Ok(None)`).
pub async fn check_stored_token(clerk: &ClerkConfig) -> Result<Option<FopsClaims>, AuthError> {
    let Some(jwt) = crate::token_store::load() else {
        return Ok(None);
    };
    check_token(&jwt, clerk).await
}

/// Same as [`check_stored_token`] for an explicit token.
///
/// # Errors
///
/// See [`check_stored_token`].
pub async fn check_token(
    jwt: &str,
    clerk: &ClerkConfig,
) -> Result<Option<FopsClaims>, AuthError> {
    let claims = if clerk.can_verify() {
        crate::jwks::validate(jwt, &clerk.secret_key).await?
    } else {
        tracing::debug!("no Clerk secret key configured; decoding session token unverified");
        FopsClaims::from_unverified(jwt)?
    };

    if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
        tracing::warn!(
            expires_at = %claims.expires_at,
            "session token expires within {EXPIRY_BUFFER_SECS}s; sign in again with `fops auth login`",
        );
        return Ok(None);
    }

    Ok(Some(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::test_support::make_jwt;
    use serde_json::json;

    #[tokio::test]
    async fn unverified_fresh_token_is_accepted() {
        let jwt = make_jwt(&json!({
            "sub": "user_1",
            "exp": chrono::Utc::now().timestamp() + 3600,
            "role": "admin"
        }));
        let claims = check_token(&jwt, &ClerkConfig::default())
            .await
            .unwrap()
            .expect("claims");
        assert_eq!(claims.user_id, "user_1");
    }

    #[tokio::test]
    async fn near_expiry_token_is_signed_out() {
        let jwt = make_jwt(&json!({
            "sub": "user_1",
            "exp": chrono::Utc::now().timestamp() + 10
        }));
        let claims = check_token(&jwt, &ClerkConfig::default()).await.unwrap();
        assert!(claims.is_none());
    }

    #[tokio::test]
    async fn garbage_token_is_an_error() {
        let result = check_token("garbage", &ClerkConfig::default()).await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }
}
