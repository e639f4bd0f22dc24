//! JSON Schema registry for the API contracts.
//!
//! Schemas are generated from the contract types with [`schemars::schema_for!`]
//! and exposed by name for `fops schema` and for validating fixtures.

use std::collections::BTreeMap;

use schemars::schema_for;

use crate::errors::CoreError;

/// Named store of contract schemas.
pub struct ContractSchemas {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).unwrap_or(serde_json::Value::Null),
        );
    };
}

impl Default for ContractSchemas {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractSchemas {
    #[must_use]
    pub fn new() -> Self {
        use crate::entities as e;

        let mut schemas = BTreeMap::new();

        register!(schemas, "chat_request", e::ChatRequest);
        register!(schemas, "chat_response", e::ChatResponse);
        register!(schemas, "chat_message", e::ChatMessage);
        register!(schemas, "citation", e::Citation);
        register!(schemas, "upload_metadata", e::UploadMetadata);
        register!(schemas, "upload_receipt", e::UploadReceipt);
        register!(schemas, "audit_log_entry", e::AuditLogEntry);
        register!(schemas, "audit_log_page", e::AuditLogPage);
        register!(schemas, "export_payload", e::ExportPayload);
        register!(schemas, "analytics_summary", e::AnalyticsSummary);
        register!(schemas, "auth_identity", crate::identity::AuthIdentity);

        Self { schemas }
    }

    /// Registered schema names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SchemaNotFound` for an unknown name, or
    /// `CoreError::Validation` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), CoreError> {
        let schema = self
            .get(name)
            .ok_or_else(|| CoreError::SchemaNotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| CoreError::Validation(format!("invalid schema '{name}': {e}")))?;

        let errors = validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors.join("; ")))
        }
    }
}
