//! Client route table.
//!
//! The auth gate answers with a [`Route`] to redirect to; the terminal front
//! end maps each route onto the command that plays the same part.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Chat view.
    Home,
    SignIn,
    SignUp,
    /// Admin upload view.
    Admin,
    AdminAnalytics,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
            Self::Admin => "/admin",
            Self::AdminAnalytics => "/admin/analytics",
        }
    }

    #[must_use]
    pub const fn requires_admin(self) -> bool {
        matches!(self, Self::Admin | Self::AdminAnalytics)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
