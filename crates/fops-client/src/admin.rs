use fops_core::entities::{UploadMetadata, UploadReceipt};
use reqwest::multipart::{Form, Part};

use crate::ApiClient;
use crate::error::ApiError;
use crate::http::{check_response, read_json, with_bearer};

const PDF_MIME: &str = "application/pdf";

impl ApiClient {
    /// `POST /admin/upload` as `multipart/form-data` with fields
    /// `file`, `org_id`, `manual_name`, `version`.
    ///
    /// The bearer token is attached when one is available.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with the verbatim body for a non-success
    /// status, and transport/parse errors otherwise.
    pub async fn upload(
        &self,
        token: Option<&str>,
        metadata: &UploadMetadata,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, ApiError> {
        tracing::debug!(
            file = file_name,
            size = bytes.len(),
            org_id = %metadata.org_id,
            manual = %metadata.manual_name,
            version = %metadata.version,
            "POST /admin/upload"
        );
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(PDF_MIME)?;
        let form = Form::new()
            .part("file", part)
            .text("org_id", metadata.org_id.clone())
            .text("manual_name", metadata.manual_name.clone())
            .text("version", metadata.version.clone());

        let req = self.http.post(self.url("/admin/upload")).multipart(form);
        let resp = with_bearer(req, token).send().await?;
        read_json(check_response(resp).await?).await
    }

    /// `POST /admin/reindex?doc_id=…`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn reindex(&self, token: Option<&str>, doc_id: &str) -> Result<(), ApiError> {
        tracing::debug!(doc_id, "POST /admin/reindex");
        let url = self.url(&format!(
            "/admin/reindex?doc_id={}",
            urlencoding::encode(doc_id)
        ));
        let resp = with_bearer(self.http.post(url), token).send().await?;
        check_response(resp).await?;
        Ok(())
    }
}
