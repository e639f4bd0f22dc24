use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Env, TOML or defaults could not be merged into [`crate::FopsConfig`].
    #[error("failed to load FranchiseOps configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("failed to read .env: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("{field} = {value:?} is not usable: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}
