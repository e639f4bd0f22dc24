use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `fops auth login`")]
    NotAuthenticated,

    #[error("session expired; run `fops auth login` again")]
    TokenExpired,

    /// The token failed signature or expiry checks, or JWKS was unreachable.
    #[error("session token rejected by Clerk: {0}")]
    JwksValidation(String),

    #[error("malformed session token: {0}")]
    InvalidToken(String),

    #[error("browser sign-in failed: {0}")]
    BrowserFlowFailed(String),

    #[error("API key sign-in failed: {0}")]
    ApiKeyFailed(String),

    /// Keychain and credentials file both unusable.
    #[error("could not access stored credentials: {0}")]
    TokenStoreError(String),
}
