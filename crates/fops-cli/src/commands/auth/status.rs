use fops_auth::refresh::check_stored_token;
use fops_auth::token_store::detect_token_source;
use fops_config::FopsConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    role: Option<String>,
    admin: bool,
    org_id: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    verified: bool,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &FopsConfig) -> anyhow::Result<()> {
    let verified = config.clerk.can_verify();
    let status = match check_stored_token(&config.clerk).await {
        Ok(Some(claims)) => {
            let role = claims.role();
            AuthStatusResponse {
                authenticated: true,
                role: Some(role.to_string()),
                admin: role == fops_core::enums::Role::Admin,
                user_id: Some(claims.user_id),
                org_id: claims.org_id,
                expires_at: Some(claims.expires_at.to_rfc3339()),
                token_source: detect_token_source().map(|source| source.to_string()),
                verified,
                note: (!verified).then(|| {
                    "FOPS_CLERK__SECRET_KEY not configured; token decoded without signature check"
                        .to_string()
                }),
            }
        }
        Ok(None) => AuthStatusResponse {
            note: Some("no valid token found".into()),
            ..AuthStatusResponse::default()
        },
        Err(error) => AuthStatusResponse {
            note: Some(error.to_string()),
            ..AuthStatusResponse::default()
        },
    };

    output(&status, flags.format)
}
