//! Chat view configuration.

use serde::{Deserialize, Serialize};

fn default_manual_name() -> String {
    "OpsManual".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatConfig {
    /// Manual the chat view asks questions about.
    #[serde(default = "default_manual_name")]
    pub manual_name: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            manual_name: default_manual_name(),
        }
    }
}
