use fops_auth::FopsClaims;
use fops_auth::browser_flow::{self, HostedPage};
use fops_config::{ClerkConfig, FopsConfig};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

const BROWSER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    role: String,
    admin: bool,
    org_id: Option<String>,
    expires_at: String,
}

impl From<FopsClaims> for AuthLoginResponse {
    fn from(claims: FopsClaims) -> Self {
        let role = claims.role();
        Self {
            authenticated: true,
            user_id: claims.user_id,
            role: role.to_string(),
            admin: role == fops_core::enums::Role::Admin,
            org_id: claims.org_id,
            expires_at: claims.expires_at.to_rfc3339(),
        }
    }
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &FopsConfig,
) -> anyhow::Result<()> {
    let claims = if args.api_key {
        if !config.clerk.can_verify() {
            anyhow::bail!("auth login --api-key: FOPS_CLERK__SECRET_KEY is not configured");
        }
        let user_id = args
            .user_id
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("auth login --api-key requires --user-id"))?;
        fops_auth::api_key::login_with_api_key(&config.clerk, user_id).await?
    } else {
        browser(&config.clerk, HostedPage::SignIn).await?
    };

    output(&AuthLoginResponse::from(claims), flags.format)
}

pub async fn handle_signup(flags: &GlobalFlags, config: &FopsConfig) -> anyhow::Result<()> {
    let claims = browser(&config.clerk, HostedPage::SignUp).await?;
    output(&AuthLoginResponse::from(claims), flags.format)
}

async fn browser(clerk: &ClerkConfig, page: HostedPage) -> anyhow::Result<FopsClaims> {
    let frontend_api = resolve_frontend_api(clerk)?;
    Ok(browser_flow::login(&frontend_api, clerk, page, BROWSER_TIMEOUT).await?)
}

/// Resolve the Clerk frontend API hostname.
///
/// Priority: `clerk.frontend_url` → hostname of `clerk.jwks_url`.
fn resolve_frontend_api(clerk: &ClerkConfig) -> anyhow::Result<String> {
    if !clerk.frontend_url.is_empty() {
        return normalize_frontend_host(&clerk.frontend_url);
    }
    if clerk.jwks_url.is_empty() {
        anyhow::bail!(
            "cannot determine Clerk frontend URL; set FOPS_CLERK__FRONTEND_URL or FOPS_CLERK__JWKS_URL"
        );
    }
    normalize_frontend_host(&clerk.jwks_url)
}

/// `https://ruling-doe-21.clerk.accounts.dev/.well-known/jwks.json` →
/// `ruling-doe-21.accounts.dev` (the hosted pages live on the non-`clerk.` host).
fn normalize_frontend_host(value: &str) -> anyhow::Result<String> {
    let host = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value)
        .split('/')
        .next()
        .unwrap_or_default()
        .trim();

    if host.is_empty() {
        anyhow::bail!("invalid Clerk frontend URL '{value}'");
    }

    Ok(host.strip_suffix(".clerk.accounts.dev").map_or_else(
        || host.to_string(),
        |stripped| format!("{stripped}.accounts.dev"),
    ))
}
