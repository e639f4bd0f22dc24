//! `[clerk]`: where the hosted sign-in pages live and how tokens are checked.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClerkConfig {
    #[serde(default)]
    pub publishable_key: String,

    /// Backend key. When set, stored session tokens are checked against JWKS;
    /// without it they are only decoded.
    #[serde(default)]
    pub secret_key: String,

    #[serde(default)]
    pub jwks_url: String,

    /// Host of the hosted sign-in and sign-up pages, e.g. `ruling-doe-21.accounts.dev`.
    /// Derived from `jwks_url` when empty.
    #[serde(default)]
    pub frontend_url: String,
}

impl ClerkConfig {
    /// A browser sign-in can be started: there is a publishable key and a
    /// host to send the user to.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.publishable_key.is_empty()
            && (!self.frontend_url.is_empty() || !self.jwks_url.is_empty())
    }

    #[must_use]
    pub fn can_verify(&self) -> bool {
        !self.secret_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "", false)]
    #[case("pk_test_1", "", "", false)]
    #[case("pk_test_1", "ruling-doe-21.accounts.dev", "", true)]
    #[case("pk_test_1", "", "https://ruling-doe-21.clerk.accounts.dev/.well-known/jwks.json", true)]
    #[case("", "ruling-doe-21.accounts.dev", "", false)]
    fn sign_in_needs_key_and_host(
        #[case] publishable_key: &str,
        #[case] frontend_url: &str,
        #[case] jwks_url: &str,
        #[case] expected: bool,
    ) {
        let config = ClerkConfig {
            publishable_key: publishable_key.into(),
            frontend_url: frontend_url.into(),
            jwks_url: jwks_url.into(),
            ..ClerkConfig::default()
        };
        assert_eq!(config.is_configured(), expected);
    }

    #[test]
    fn verification_follows_secret_key() {
        let mut config = ClerkConfig::default();
        assert!(!config.can_verify());
        config.secret_key = "sk_test_2".into();
        assert!(config.can_verify());
    }
}
