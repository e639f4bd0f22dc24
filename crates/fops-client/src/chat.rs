use fops_core::entities::{ChatRequest, ChatResponse};

use crate::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, read_json};

impl ApiClient {
    /// `POST /chat` with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body that is not a chat response.
    pub async fn chat(&self, token: &str, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        tracing::debug!(manual = %request.manual_name, "POST /chat");
        let resp = self
            .http
            .post(self.url("/chat"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        read_json(check_response(resp).await?).await
    }
}
