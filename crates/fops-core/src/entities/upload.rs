use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-text metadata sent alongside an uploaded manual.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadMetadata {
    pub org_id: String,
    pub manual_name: String,
    pub version: String,
}

/// Response of `POST /admin/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadReceipt {
    pub doc_id: String,
}
