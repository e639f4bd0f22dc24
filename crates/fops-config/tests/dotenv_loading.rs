//! `.env` loading. Kept in its own test binary: `dotenvy` writes the process
//! environment, which `figment::Jail` does not restore.

use figment::Jail;
use fops_config::{ConfigError, FopsConfig};

#[test]
fn dotenv_values_reach_the_config() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "FOPS_CHAT__MANUAL_NAME=KitchenManual\nFOPS_API__TIMEOUT_SECS=9\n",
        )?;

        let config = FopsConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.chat.manual_name, "KitchenManual");
        assert_eq!(config.api.timeout_secs, 9);
        Ok(())
    });
}

#[test]
fn malformed_dotenv_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "FOPS_UPLOAD__VERSION='v2\n")?;

        let err = FopsConfig::load_with_dotenv().unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));
        Ok(())
    });
}
