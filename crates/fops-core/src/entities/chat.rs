use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChatRole;

/// A source reference attached to an answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Citation {
    /// Source document name (e.g. `OpsManual`).
    pub doc: String,
    /// Page numbers within the document.
    #[serde(default)]
    pub pages: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
}

impl Citation {
    /// Text of the citation chip, e.g. `OpsManual p.12` or `OpsManual p.3,4`.
    #[must_use]
    pub fn chip_label(&self) -> String {
        let pages = self
            .pages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{} p.{pages}", self.doc)
    }
}

/// One bubble in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub refused: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            citations: Vec::new(),
            refused: false,
        }
    }

    #[must_use]
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
            citations: Vec::new(),
            refused: false,
        }
    }

    /// Citation chip labels in display order.
    #[must_use]
    pub fn chip_labels(&self) -> Vec<String> {
        self.citations.iter().map(Citation::chip_label).collect()
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    pub manual_name: String,
}

/// Response of `POST /chat`.
///
/// Every field is optional on the wire; missing citations and refusal flag
/// default to empty and `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub refused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_label_single_page() {
        let cite = Citation {
            doc: "OpsManual".into(),
            pages: vec![12],
            chunk_id: None,
        };
        assert_eq!(cite.chip_label(), "OpsManual p.12");
    }

    #[test]
    fn chip_label_joins_pages_with_commas() {
        let cite = Citation {
            doc: "Safety".into(),
            pages: vec![3, 4, 9],
            chunk_id: Some("c-1".into()),
        };
        assert_eq!(cite.chip_label(), "Safety p.3,4,9");
    }

    #[test]
    fn chat_response_tolerates_missing_fields() {
        let resp: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_none());
        assert!(resp.citations.is_empty());
        assert!(!resp.refused);
    }

    #[test]
    fn chat_response_parses_backend_shape() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"answer":"Returns within 30 days.","citations":[{"doc":"OpsManual","pages":[12]}],"refused":false}"#,
        )
        .unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Returns within 30 days."));
        assert_eq!(resp.citations.len(), 1);
        assert!(resp.citations[0].chunk_id.is_none());
    }
}
