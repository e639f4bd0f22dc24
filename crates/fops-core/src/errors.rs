//! Cross-cutting error types for the FranchiseOps client.
//!
//! Domain-specific errors (`ApiError`, `AuthError`, `ConfigError`) are defined
//! in their respective crates. They converge into `anyhow` in `fops-cli`.

use thiserror::Error;

/// Errors that can be raised by any `fops-*` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value failed to parse into one of the closed enums.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A schema name was requested that is not registered.
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
