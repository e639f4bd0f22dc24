//! Admin upload view: one pending PDF, its metadata, and the re-index
//! action unlocked by a successful upload.

use std::path::{Path, PathBuf};

use fops_auth::AuthSession;
use fops_client::{ApiClient, ApiError};
use fops_config::UploadConfig;
use fops_core::entities::UploadMetadata;

use crate::error::UploadError;
use crate::notice::Notice;

const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// MIME type implied by the file extension.
#[must_use]
pub fn mime_for(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.eq_ignore_ascii_case("pdf"))
        .map(|_| PDF_MIME)
}

/// A PDF read from disk and ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Read and validate `path`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NotPdf`] when the extension does not map to
    /// `application/pdf`, [`UploadError::BadPdfHeader`] when the content
    /// does not start with `%PDF-`, and [`UploadError::Read`] on I/O failure.
    pub fn load(path: &Path) -> Result<Self, UploadError> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        if mime_for(path) != Some(PDF_MIME) {
            return Err(UploadError::NotPdf { name });
        }

        let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(UploadError::BadPdfHeader { name });
        }

        Ok(Self {
            path: path.to_path_buf(),
            name,
            bytes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

pub struct UploadView<S> {
    client: ApiClient,
    session: S,
    metadata: UploadMetadata,
    file: Option<SelectedFile>,
    doc_id: Option<String>,
    is_uploading: bool,
    is_reindexing: bool,
}

impl<S: AuthSession> UploadView<S> {
    /// New view with metadata defaults from `[upload]`.
    #[must_use]
    pub fn new(client: ApiClient, session: S, defaults: &UploadConfig) -> Self {
        Self {
            client,
            session,
            metadata: UploadMetadata {
                org_id: defaults.org_id.clone(),
                manual_name: defaults.manual_name.clone(),
                version: defaults.version.clone(),
            },
            file: None,
            doc_id: None,
            is_uploading: false,
            is_reindexing: false,
        }
    }

    #[must_use]
    pub const fn metadata(&self) -> &UploadMetadata {
        &self.metadata
    }

    pub const fn metadata_mut(&mut self) -> &mut UploadMetadata {
        &mut self.metadata
    }

    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    /// Target a document uploaded in an earlier session.
    pub fn set_doc_id(&mut self, doc_id: impl Into<String>) {
        self.doc_id = Some(doc_id.into());
    }

    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    #[must_use]
    pub const fn is_reindexing(&self) -> bool {
        self.is_reindexing
    }

    /// Whether the upload action is enabled.
    #[must_use]
    pub const fn can_upload(&self) -> bool {
        self.file.is_some() && !self.is_uploading
    }

    /// Whether the re-index action is enabled.
    #[must_use]
    pub const fn can_reindex(&self) -> bool {
        self.doc_id.is_some() && !self.is_reindexing
    }

    /// Pick a file through the file picker.
    ///
    /// # Errors
    ///
    /// Returns a failure [`Notice`] for anything but a PDF. The current
    /// selection is kept.
    pub fn select_file(&mut self, path: &Path) -> Result<&SelectedFile, Notice> {
        self.accept(path, "picker")
    }

    /// Drop a file onto the drop zone. Same rules as [`Self::select_file`].
    ///
    /// # Errors
    ///
    /// See [`Self::select_file`].
    pub fn drop_file(&mut self, path: &Path) -> Result<&SelectedFile, Notice> {
        self.accept(path, "drop")
    }

    fn accept(&mut self, path: &Path, via: &'static str) -> Result<&SelectedFile, Notice> {
        match SelectedFile::load(path) {
            Ok(file) => {
                tracing::debug!(file = file.name(), size = file.size(), via, "file selected");
                Ok(self.file.insert(file))
            }
            Err(error) => {
                tracing::warn!(%error, via, "file rejected");
                Err(Notice::failure(error.to_string()))
            }
        }
    }

    /// Upload the selected file.
    ///
    /// Returns `None` without a request when no file is selected or an
    /// upload is already running.
    pub async fn upload(&mut self) -> Option<Notice> {
        if !self.can_upload() {
            return None;
        }
        let file = self.file.as_ref()?;
        self.is_uploading = true;

        let token = self.optional_token().await;
        let result = self
            .client
            .upload(
                token.as_deref(),
                &self.metadata,
                &file.name,
                file.bytes.clone(),
            )
            .await;
        self.is_uploading = false;

        Some(match result {
            Ok(receipt) => {
                tracing::info!(doc_id = %receipt.doc_id, "manual uploaded");
                self.doc_id = Some(receipt.doc_id);
                Notice::success("Upload successful!")
            }
            Err(ApiError::Api { status, message }) => {
                tracing::warn!(status, "upload rejected");
                Notice::failure(format!("Upload failed ({status}): {message}"))
            }
            Err(ApiError::RateLimited {
                retry_after_secs,
                message,
            }) => {
                tracing::warn!(retry_after_secs, "upload rate limited");
                Notice::failure(format!("Upload failed (429): {message}"))
            }
            Err(error) => {
                tracing::warn!(%error, "upload failed");
                Notice::failure(format!("Upload failed: {error}"))
            }
        })
    }

    /// Re-index the last uploaded document.
    ///
    /// Returns `None` without a request when nothing has been uploaded yet
    /// or a re-index is already running.
    pub async fn reindex(&mut self) -> Option<Notice> {
        if !self.can_reindex() {
            return None;
        }
        let doc_id = self.doc_id.clone()?;
        self.is_reindexing = true;

        let token = self.optional_token().await;
        let result = self.client.reindex(token.as_deref(), &doc_id).await;
        self.is_reindexing = false;

        Some(match result {
            Ok(()) => {
                tracing::info!(%doc_id, "re-index triggered");
                Notice::success("Successfully re-indexed!")
            }
            Err(error) => {
                tracing::warn!(%error, %doc_id, "re-index failed");
                Notice::failure("Re-index failed. Please try again.")
            }
        })
    }

    /// Upload and re-index send a token when one is available and let the
    /// server decide otherwise.
    async fn optional_token(&self) -> Option<String> {
        match self.session.get_token().await {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "no usable session token; sending request without one");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fops_auth::StaticSession;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn view() -> UploadView<StaticSession> {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        UploadView::new(client, StaticSession::signed_out(), &UploadConfig::default())
    }

    #[test]
    fn metadata_defaults_come_from_config() {
        let view = view();
        assert_eq!(view.metadata().org_id, "franchise_123");
        assert_eq!(view.metadata().manual_name, "OpsManual");
        assert_eq!(view.metadata().version, "v1");
    }

    #[test]
    fn mime_follows_extension_case_insensitively() {
        assert_eq!(mime_for(Path::new("a/Manual.PDF")), Some("application/pdf"));
        assert_eq!(mime_for(Path::new("manual.docx")), None);
        assert_eq!(mime_for(Path::new("manual")), None);
    }

    #[test]
    fn picker_rejects_non_pdf_and_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("manual.pdf");
        std::fs::write(&pdf, b"%PDF-1.4\n...").unwrap();
        let txt = dir.path().join("notes.txt");
        std::fs::write(&txt, b"hello").unwrap();

        let mut view = view();
        view.select_file(&pdf).unwrap();
        let notice = view.select_file(&txt).unwrap_err();

        assert!(!notice.is_success());
        assert!(notice.message.contains("notes.txt"));
        assert_eq!(view.file().map(SelectedFile::name), Some("manual.pdf"));
    }

    #[test]
    fn drop_rejects_renamed_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("fake.pdf");
        std::fs::write(&fake, b"PK\x03\x04zip").unwrap();

        let mut view = view();
        let notice = view.drop_file(&fake).unwrap_err();
        assert!(notice.message.contains("%PDF-"));
        assert!(view.file().is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = SelectedFile::load(Path::new("/nonexistent/manual.pdf")).unwrap_err();
        assert!(matches!(err, UploadError::Read { .. }));
    }

    #[tokio::test]
    async fn upload_without_file_is_a_no_op() {
        let mut view = view();
        assert!(!view.can_upload());
        assert!(view.upload().await.is_none());
        assert!(view.doc_id().is_none());
    }

    #[tokio::test]
    async fn reindex_without_doc_id_is_a_no_op() {
        let mut view = view();
        assert!(!view.can_reindex());
        assert!(view.reindex().await.is_none());
    }

    #[test]
    fn earlier_doc_id_enables_reindex() {
        let mut view = view();
        view.set_doc_id("doc_42");
        assert!(view.can_reindex());
        assert_eq!(view.doc_id(), Some("doc_42"));
    }
}
