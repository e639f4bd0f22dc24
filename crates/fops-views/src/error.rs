use std::path::PathBuf;

use fops_auth::AuthError;
use fops_client::ApiError;
use thiserror::Error;

/// Failure of a backend call made on behalf of a view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("not signed in")]
    NotSignedIn,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ViewError {
    /// Message for the user. A server that answered with an error status is
    /// summarized by `fallback`; anything else reports its own cause.
    #[must_use]
    pub fn describe(&self, fallback: &str) -> String {
        match self {
            Self::Api(ApiError::Api { .. } | ApiError::RateLimited { .. }) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// A file rejected by the upload picker or drop zone.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("only PDF files are accepted: {name}")]
    NotPdf { name: String },

    #[error("{name} is not a valid PDF (missing %PDF- header)")]
    BadPdfHeader { name: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
