use fops_config::{ApiConfig, ClerkConfig, FopsConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FopsConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FopsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url == ApiConfig::default().base_url
        && has_mistyped_key(&env_keys, "FOPS_API")
    {
        warnings.push(
            "API config appears default while FOPS_API* env vars exist. Use double underscores (example: FOPS_API__BASE_URL)."
                .to_string(),
        );
    }

    // Any field set means the section was read; only an untouched one is suspicious.
    if config.clerk == ClerkConfig::default() && has_mistyped_key(&env_keys, "FOPS_CLERK") {
        warnings.push(
            "Clerk config appears default while FOPS_CLERK* env vars exist. Use double underscores (example: FOPS_CLERK__SECRET_KEY)."
                .to_string(),
        );
    }

    warnings
}

/// `FOPS_API_BASE_URL` matches, `FOPS_API__BASE_URL` does not.
fn has_mistyped_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use fops_config::{ClerkConfig, FopsConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = FopsConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("FOPS_API_BASE_URL".to_string(), "https://api".to_string()),
                ("FOPS_CLERK_SECRET_KEY".to_string(), "sk_test".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let mut config = FopsConfig {
            clerk: ClerkConfig {
                publishable_key: "pk".to_string(),
                secret_key: "sk".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        config.api.base_url = "https://api.franchiseops.example".to_string();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("FOPS_API_BASE_URL".to_string(), "x".to_string()),
                ("FOPS_CLERK_SECRET_KEY".to_string(), "sk".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn partially_filled_clerk_section_does_not_warn() {
        let config = FopsConfig {
            clerk: ClerkConfig {
                secret_key: "sk_test".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("FOPS_CLERK_PUBLISHABLE_KEY".to_string(), "pk".to_string())],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn correctly_spelled_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &FopsConfig::default(),
            vec![("FOPS_CLERK__FRONTEND_URL".to_string(), "x".to_string())],
        );
        assert!(warnings.is_empty());
    }
}
