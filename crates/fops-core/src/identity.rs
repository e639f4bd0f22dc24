use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `fops-auth`, consumed by `fops-views` and `fops-cli`.
/// Data only. Token handling lives in `fops-auth`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Clerk user ID (from JWT `sub` claim).
    pub user_id: String,
    /// Role from the `role` custom claim.
    pub role: Role,
    /// Clerk organization ID. `None` = personal session.
    pub org_id: Option<String>,
    /// Clerk organization slug.
    pub org_slug: Option<String>,
}

impl AuthIdentity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
