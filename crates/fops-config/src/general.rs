//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default audit-log page size.
const fn default_limit() -> u32 {
    50
}

fn default_export_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for audit-log listings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Directory CSV exports are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            export_dir: default_export_dir(),
        }
    }
}
