use fops_config::ClerkConfig;
use fops_core::Route;

use crate::claims::FopsClaims;
use crate::error::AuthError;

/// Which Clerk hosted page to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostedPage {
    SignIn,
    SignUp,
}

impl HostedPage {
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::SignIn => Route::SignIn,
            Self::SignUp => Route::SignUp,
        }
    }
}

/// Query parameter names Clerk may use for the session JWT on redirect:
/// custom redirect page, hosted pages, and alternative configs.
const TOKEN_PARAM_NAMES: [&str; 3] = ["token", "__clerk_db_jwt", "session_token"];

/// Run the browser-based Clerk sign-in or sign-up flow.
///
/// 1. Start `tiny_http` on `127.0.0.1:0` (random port)
/// 2. Open the hosted page with a redirect back to localhost
/// 3. Wait for the callback carrying the JWT (in `spawn_blocking`)
/// 4. Validate (JWKS when a secret key is configured)
/// 5. Store the token
///
/// # Errors
///
/// Returns `AuthError::BrowserFlowFailed` if the server cannot bind or the
/// callback times out, and validation/storage errors otherwise.
pub async fn login(
    clerk_frontend_api: &str,
    clerk: &ClerkConfig,
    page: HostedPage,
    timeout: std::time::Duration,
) -> Result<FopsClaims, AuthError> {
    let server = tiny_http::Server::http("127.0.0.1:0")
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind: {e}")))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .ok_or_else(|| AuthError::BrowserFlowFailed("no port".into()))?;

    let state = csrf_nonce()?;
    let redirect_url = format!("http://127.0.0.1:{port}/callback?state={state}");
    let url = hosted_page_url(clerk_frontend_api, page, &redirect_url);

    eprintln!("Opening browser to: {url}");
    if let Err(error) = open::that(&url) {
        eprintln!("Failed to open browser: {error}");
        eprintln!("Open the URL above manually, then return here.");
    }

    // tiny_http::recv() blocks
    let jwt = tokio::task::spawn_blocking(move || wait_for_callback(&server, timeout, &state))
        .await
        .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))??;

    let claims = crate::refresh::check_token(&jwt, clerk)
        .await?
        .ok_or(AuthError::TokenExpired)?;
    crate::token_store::store(&jwt)?;
    tracing::info!(user_id = %claims.user_id, page = ?page, "signed in");
    Ok(claims)
}

/// Hosted page URL with the loopback redirect.
#[must_use]
pub fn hosted_page_url(frontend_api: &str, page: HostedPage, redirect_url: &str) -> String {
    format!(
        "https://{frontend_api}{path}?redirect_url={redirect}",
        path = page.route().path(),
        redirect = urlencoding::encode(redirect_url)
    )
}

/// Random 16-byte hex state nonce for CSRF protection.
fn csrf_nonce() -> Result<String, AuthError> {
    let mut nonce_bytes = [0u8; 16];
    getrandom::fill(&mut nonce_bytes)
        .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to generate CSRF nonce: {e}")))?;
    Ok(nonce_bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// What a callback request carried.
#[derive(Debug, PartialEq, Eq)]
enum Callback {
    /// Not the callback path (favicon, preflight).
    Ignored,
    /// Intermediate Clerk redirect without a token.
    Pending,
    Token { jwt: String, state: Option<String> },
}

fn parse_callback(url: &str) -> Result<Callback, AuthError> {
    let Some(query) = url.strip_prefix("/callback?") else {
        return Ok(Callback::Ignored);
    };

    let mut jwt = None;
    let mut state = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(value)
            .map_err(|e| AuthError::BrowserFlowFailed(format!("URL decode: {e}")))?
            .into_owned();
        if TOKEN_PARAM_NAMES.contains(&key) {
            jwt = Some(decoded);
        } else if key == "state" {
            state = Some(decoded);
        }
    }

    Ok(match jwt {
        Some(jwt) => Callback::Token { jwt, state },
        None => Callback::Pending,
    })
}

fn html_response(body: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(format!("<html><body>{body}</body></html>"));
    match tiny_http::Header::from_bytes("Content-Type", "text/html") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

/// Block until the callback server receives a request with a JWT.
fn wait_for_callback(
    server: &tiny_http::Server,
    timeout: std::time::Duration,
    expected_state: &str,
) -> Result<String, AuthError> {
    let deadline = std::time::Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser callback timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(req)) => req,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        match parse_callback(request.url())? {
            Callback::Ignored => {
                let _ = request.respond(tiny_http::Response::from_string("").with_status_code(204));
            }
            Callback::Pending => {
                let _ = request.respond(html_response(
                    "<h1>Waiting for authentication…</h1><p>Redirecting, please wait.</p>",
                ));
            }
            Callback::Token { jwt, state } => {
                if state.as_deref() != Some(expected_state) {
                    let _ = request.respond(html_response(
                        "<h1>Sign-in failed</h1><p>State mismatch. Check CLI output.</p>",
                    ));
                    return Err(AuthError::BrowserFlowFailed(
                        "state mismatch, possible CSRF".into(),
                    ));
                }
                let _ = request.respond(html_response(
                    "<h1>Signed in to FranchiseOps AI</h1><p>You can close this tab.</p>",
                ));
                return Ok(jwt);
            }
        }
    }
}
