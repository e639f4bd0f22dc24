use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Open the hosted sign-in page and store the session token.
    Login(AuthLoginArgs),
    /// Open the hosted sign-up page; the new account is signed in afterwards.
    Signup,
    /// Forget the stored session token.
    Logout,
    /// Show who is signed in, their role, and where the token came from.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Skip the browser and mint a token with `clerk.secret_key` (CI).
    #[arg(long)]
    pub api_key: bool,
    /// Clerk user to sign in as; only with --api-key.
    #[arg(long, requires = "api_key")]
    pub user_id: Option<String>,
}
