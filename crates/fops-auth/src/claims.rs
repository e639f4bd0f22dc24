use base64::Engine as _;
use chrono::{DateTime, Utc};
use fops_core::enums::Role;
use fops_core::identity::AuthIdentity;

use crate::error::AuthError;

/// Parsed Clerk JWT claims.
///
/// Produced by JWKS validation (or unverified decoding when no secret key is
/// configured), consumed by sessions and CLI commands.
#[derive(Debug, Clone)]
pub struct FopsClaims {
    /// Raw JWT string, sent as the bearer token.
    pub raw_jwt: String,
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    /// Raw `role` custom claim, if the session token carries one.
    pub role_claim: Option<String>,
    /// Organization ID (`org_id` claim). `None` if personal/no-org session.
    pub org_id: Option<String>,
    /// Organization slug (`org_slug` claim).
    pub org_slug: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl FopsClaims {
    /// Build claims from the JWT payload without verifying the signature.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the JWT is malformed or lacks
    /// `sub` or `exp`.
    pub fn from_unverified(jwt: &str) -> Result<Self, AuthError> {
        let payload = decode_payload(jwt)?;
        let user_id = payload["sub"]
            .as_str()
            .ok_or_else(|| AuthError::InvalidToken("missing sub claim".into()))?
            .to_string();
        let exp = payload["exp"]
            .as_i64()
            .ok_or_else(|| AuthError::InvalidToken("missing exp claim".into()))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;

        Ok(Self {
            raw_jwt: jwt.to_string(),
            user_id,
            role_claim: role_from_payload(&payload),
            org_id: payload["org_id"].as_str().map(str::to_string),
            org_slug: payload["org_slug"].as_str().map(str::to_string),
            expires_at,
        })
    }

    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_claim(self.role_claim.as_deref())
    }

    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            role: self.role(),
            org_id: self.org_id.clone(),
            org_slug: self.org_slug.clone(),
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}

/// Decode the JWT payload segment. Does NOT verify the signature.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the JWT does not have three segments
/// or the payload is not base64url-encoded JSON.
pub fn decode_payload(jwt: &str) -> Result<serde_json::Value, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidToken(format!("JSON parse failed: {e}")))
}

/// Locate the role claim. Session token templates expose it either directly
/// (`role`) or inside the user's public metadata.
#[must_use]
pub fn role_from_payload(payload: &serde_json::Value) -> Option<String> {
    ["/role", "/metadata/role", "/public_metadata/role"]
        .iter()
        .find_map(|pointer| payload.pointer(pointer).and_then(serde_json::Value::as_str))
        .map(str::to_string)
}
