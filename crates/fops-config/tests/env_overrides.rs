use figment::Jail;
use fops_config::{AnalyticsSource, FopsConfig};

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "FOPS_CLERK__SECRET_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = FopsConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.clerk.secret_key, "sk_from_external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("FOPS_CLERK__SECRET_KEY", "sk_from_env");
        let overrides = vec![(
            "FOPS_CLERK__SECRET_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = FopsConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.clerk.secret_key, "sk_from_env");
        Ok(())
    });
}

#[test]
fn env_selects_analytics_source_and_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("FOPS_API__BASE_URL", "https://ops.example.com");
        jail.set_env("FOPS_API__ANALYTICS_SOURCE", "query_analytics");
        jail.set_env("FOPS_API__TIMEOUT_SECS", "5");

        let config = FopsConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://ops.example.com");
        assert_eq!(config.api.analytics_source, AnalyticsSource::QueryAnalytics);
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}
