//! # fops-views
//!
//! View state for the FranchiseOps client.
//!
//! Each view owns its state, calls the API through [`fops_client::ApiClient`],
//! and turns every failure into something the user sees: a fallback chat
//! reply, an error banner, or a [`Notice`]. Nothing here retries and nothing
//! is shared between views.
//!
//! Views are driven through `&mut self`, so one view never has two calls in
//! flight and a late response cannot overwrite a newer one.

pub mod analytics;
pub mod chat;
pub mod error;
pub mod notice;
pub mod present;
pub mod upload;

pub use analytics::{AnalyticsView, ExportFile};
pub use chat::{ChatView, PendingTurn};
pub use error::{UploadError, ViewError};
pub use notice::{Notice, NoticeKind};
pub use upload::{SelectedFile, UploadView};

use fops_auth::AuthSession;

/// Bearer token for an endpoint that requires one.
async fn require_token<S: AuthSession>(session: &S) -> Result<String, ViewError> {
    session.get_token().await?.ok_or(ViewError::NotSignedIn)
}
