//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use fops_config::FopsConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.franchiseops.test"
timeout_secs = 12

[clerk]
publishable_key = "pk_test_abc"
secret_key = "sk_test_def"
frontend_url = "ruling-doe-21.accounts.dev"

[chat]
manual_name = "SafetyManual"

[upload]
org_id = "franchise_999"
version = "v7"

[general]
default_limit = 25
export_dir = "./exports"
"#,
        )?;

        let config: FopsConfig = Figment::from(Serialized::defaults(FopsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.franchiseops.test");
        assert_eq!(config.api.timeout_secs, 12);
        assert!(config.clerk.is_configured());
        assert_eq!(config.chat.manual_name, "SafetyManual");
        assert_eq!(config.upload.org_id, "franchise_999");
        // Unset fields in a present section keep their defaults.
        assert_eq!(config.upload.manual_name, "OpsManual");
        assert_eq!(config.upload.version, "v7");
        assert_eq!(config.general.default_limit, 25);
        assert_eq!(config.general.export_dir, "./exports");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[chat]
manual_name = "FromToml"
"#,
        )?;
        jail.set_env("FOPS_CHAT__MANUAL_NAME", "FromEnv");

        let config: FopsConfig = Figment::from(Serialized::defaults(FopsConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FOPS_").split("__"))
            .extract()?;

        assert_eq!(config.chat.manual_name, "FromEnv");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".franchiseops")?;
        jail.create_file(
            ".franchiseops/config.toml",
            r#"
[api]
base_url = "http://127.0.0.1:9000"
"#,
        )?;

        let config = FopsConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        Ok(())
    });
}

#[test]
fn invalid_type_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("FOPS_API__TIMEOUT_SECS", "soon");
        assert!(FopsConfig::load().is_err());
        Ok(())
    });
}
