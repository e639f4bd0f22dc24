//! Headless sign-in for CI: mint a session token with the Clerk backend API.

use fops_config::ClerkConfig;
use serde_json::Value;

use crate::claims::FopsClaims;
use crate::error::AuthError;

const CLERK_API: &str = "https://api.clerk.com/v1";

/// Clerk JWT template that carries the `role` claim.
pub const JWT_TEMPLATE: &str = "franchiseops";

/// Create a session for `user_id`, mint a [`JWT_TEMPLATE`] token for it,
/// verify it and store it. The secret key is only used for these calls.
///
/// # Errors
///
/// Returns `AuthError::ApiKeyFailed` when a Clerk call fails, plus whatever
/// [`crate::jwks::validate`] and [`crate::token_store::store`] return.
pub async fn login_with_api_key(
    clerk: &ClerkConfig,
    user_id: &str,
) -> Result<FopsClaims, AuthError> {
    let http = reqwest::Client::new();
    let secret_key = clerk.secret_key.as_str();

    let session = clerk_post(
        &http,
        secret_key,
        &format!("{CLERK_API}/sessions"),
        Some(serde_json::json!({ "user_id": user_id })),
        "create session",
    )
    .await?;
    let session_id = string_field(&session, "id", "create session")?;

    let minted = clerk_post(
        &http,
        secret_key,
        &format!("{CLERK_API}/sessions/{session_id}/tokens/{JWT_TEMPLATE}"),
        None,
        "mint token",
    )
    .await?;
    let jwt = string_field(&minted, "jwt", "mint token")?;

    let claims = crate::jwks::validate(jwt, secret_key).await?;
    crate::token_store::store(jwt)?;
    tracing::info!(user_id, "signed in with API key");
    Ok(claims)
}

async fn clerk_post(
    http: &reqwest::Client,
    secret_key: &str,
    url: &str,
    body: Option<Value>,
    step: &str,
) -> Result<Value, AuthError> {
    let fail = |e: reqwest::Error| AuthError::ApiKeyFailed(format!("{step}: {e}"));

    let mut request = http.post(url).bearer_auth(secret_key);
    if let Some(body) = body {
        request = request.json(&body);
    }
    request
        .send()
        .await
        .map_err(fail)?
        .error_for_status()
        .map_err(fail)?
        .json::<Value>()
        .await
        .map_err(fail)
}

fn string_field<'a>(value: &'a Value, name: &str, step: &str) -> Result<&'a str, AuthError> {
    value[name]
        .as_str()
        .ok_or_else(|| AuthError::ApiKeyFailed(format!("{step}: response has no '{name}'")))
}
