//! Default metadata for the upload view form.

use serde::{Deserialize, Serialize};

fn default_org_id() -> String {
    "franchise_123".to_string()
}

fn default_manual_name() -> String {
    "OpsManual".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    #[serde(default = "default_org_id")]
    pub org_id: String,

    #[serde(default = "default_manual_name")]
    pub manual_name: String,

    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            org_id: default_org_id(),
            manual_name: default_manual_name(),
            version: default_version(),
        }
    }
}
