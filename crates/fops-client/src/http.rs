//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After` parsing,
//! other non-success → [`ApiError::Api`], both keeping the body) and JSON decoding so the endpoint
//! modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`ApiError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s) and the body.
/// - **Non-success status** → [`ApiError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    tracing::debug!(status = status.as_u16(), url = %resp.url(), "response");
    if status == 429 {
        let retry_after_secs = parse_retry_after(&resp);
        return Err(ApiError::RateLimited {
            retry_after_secs,
            message: resp.text().await.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as `T`.
///
/// Decoding goes through the text body so a malformed payload surfaces as
/// [`ApiError::Parse`] rather than a transport error.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Attach `Authorization: Bearer` when a token is present.
pub fn with_bearer(req: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => req.bearer_auth(token),
        None => req,
    }
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
