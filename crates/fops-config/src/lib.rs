//! # fops-config
//!
//! Layered configuration loading for the FranchiseOps client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOPS_*` prefix, `__` as separator)
//! 2. External overrides passed to [`FopsConfig::load_with_env_overrides`]
//! 3. Project-level `.franchiseops/config.toml`
//! 4. User-level `~/.config/franchiseops/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOPS_API__BASE_URL` -> `api.base_url`,
//! `FOPS_CLERK__SECRET_KEY` -> `clerk.secret_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fops_config::FopsConfig;
//!
//! let config = FopsConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod chat;
mod clerk;
mod error;
mod general;
mod upload;

pub use api::{AnalyticsSource, ApiConfig};
pub use chat::ChatConfig;
pub use clerk::ClerkConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use upload::UploadConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "FOPS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FopsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub clerk: ClerkConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FopsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`FopsConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` into the process environment, then [`FopsConfig::load`].
    /// Variables already set in the environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` for an unreadable `.env`, otherwise see
    /// [`FopsConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv()?;
        Self::load()
    }

    /// Load configuration with extra `FOPS_*` key/value pairs layered below
    /// the process environment.
    ///
    /// Keys without the `FOPS_` prefix are ignored.
    ///
    /// # Errors
    ///
    /// See [`FopsConfig::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        Self::figment_with_overrides(overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".franchiseops/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: External overrides
        for (key, value) in overrides {
            if let Some(path) = env_key_to_path(key) {
                figment = figment.merge(Serialized::default(&path, value));
            }
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("franchiseops").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    /// Read `.env` from the working directory or one of its parents.
    /// A missing file is fine; a malformed one is not.
    fn load_dotenv() -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(error) if error.not_found() => Ok(()),
            Err(error) => Err(ConfigError::Dotenv(error)),
        }
    }
}

/// Map `FOPS_CLERK__SECRET_KEY` to the figment key path `clerk.secret_key`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
