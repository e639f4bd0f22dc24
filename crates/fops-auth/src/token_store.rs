//! Where the session JWT lives between commands.
//!
//! Lookup order: OS keychain, then `FOPS_AUTH__TOKEN`, then
//! `~/.franchiseops/credentials` (mode 0600). Writes go to the keychain and
//! fall back to the file when no keychain is available.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const KEYRING_SERVICE: &str = "franchiseops-cli";
const KEYRING_ACCOUNT: &str = "session-jwt";
const TOKEN_ENV_VAR: &str = "FOPS_AUTH__TOKEN";

/// Tests point this at a throwaway service so they never see a real login.
const SERVICE_OVERRIDE_VAR: &str = "FOPS_KEYRING_SERVICE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        })
    }
}

fn keyring_entry() -> Option<keyring::Entry> {
    let service =
        std::env::var(SERVICE_OVERRIDE_VAR).unwrap_or_else(|_| KEYRING_SERVICE.to_string());
    match keyring::Entry::new(&service, KEYRING_ACCOUNT) {
        Ok(entry) => Some(entry),
        Err(error) => {
            tracing::debug!(%error, "keyring unavailable");
            None
        }
    }
}

/// Persist a freshly issued JWT.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` when the keychain refuses the token
/// and the credentials file cannot be written either.
pub fn store(jwt: &str) -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry() {
        match entry.set_password(jwt) {
            Ok(()) => return Ok(()),
            Err(error) => tracing::warn!(%error, "keyring write failed; using credentials file"),
        }
    }
    write_file(&credentials_path()?, jwt)
}

/// The stored JWT, if any. Expiry is not checked here.
#[must_use]
pub fn load() -> Option<String> {
    locate().map(|(_, token)| token)
}

/// Which store [`load`] would read from.
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    locate().map(|(source, _)| source)
}

/// Forget the session everywhere it may be stored. The env var is left alone.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file exists but
/// cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry()
        && let Err(error) = entry.delete_credential()
    {
        tracing::debug!(%error, "no keyring credential to delete");
    }

    let path = credentials_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(store_error("remove", &path, &error)),
    }
}

fn locate() -> Option<(TokenSource, String)> {
    let from_keyring = keyring_entry()
        .and_then(|entry| entry.get_password().ok())
        .and_then(non_blank);
    if let Some(token) = from_keyring {
        return Some((TokenSource::Keyring, token));
    }

    if let Some(token) = std::env::var(TOKEN_ENV_VAR).ok().and_then(non_blank) {
        return Some((TokenSource::Env, token));
    }

    credentials_path()
        .ok()
        .and_then(|path| read_file(&path))
        .map(|token| (TokenSource::File, token))
}

fn non_blank(token: String) -> Option<String> {
    let trimmed = token.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    let home = dirs::home_dir().ok_or_else(|| {
        AuthError::TokenStoreError("no home directory for ~/.franchiseops/credentials".into())
    })?;
    Ok(home.join(".franchiseops").join("credentials"))
}

fn store_error(op: &str, path: &Path, error: &std::io::Error) -> AuthError {
    AuthError::TokenStoreError(format!("{op} {}: {error}", path.display()))
}

fn write_file(path: &Path, jwt: &str) -> Result<(), AuthError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| store_error("create", dir, &e))?;
    }
    fs::write(path, jwt).map_err(|e| store_error("write", path, &e))?;
    restrict(path)
}

#[cfg(unix)]
fn restrict(path: &Path) -> Result<(), AuthError> {
    use std::os::unix::fs::PermissionsExt;

    if let Some(dir) = path.parent()
        && let Err(error) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
    {
        tracing::warn!(%error, dir = %dir.display(), "could not restrict credentials directory");
    }
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| store_error("chmod", path, &e))
}

#[cfg(not(unix))]
fn restrict(_path: &Path) -> Result<(), AuthError> {
    Ok(())
}

fn read_file(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().and_then(non_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_live_in_the_franchiseops_dir() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".franchiseops/credentials"));
    }

    #[test]
    fn written_token_reads_back_trimmed() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("credentials");

        write_file(&path, "header.payload.sig\n").expect("write");
        assert_eq!(read_file(&path).as_deref(), Some("header.payload.sig"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600);
        }
    }

    #[test]
    fn blank_or_missing_file_means_no_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        assert!(read_file(&path).is_none());

        std::fs::write(&path, "   \n  ").expect("write");
        assert!(read_file(&path).is_none());
    }

    #[test]
    fn sources_display_as_lowercase_names() {
        assert_eq!(TokenSource::Keyring.to_string(), "keyring");
        assert_eq!(TokenSource::File.to_string(), "file");
    }
}
