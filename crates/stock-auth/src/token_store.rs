//! Persistent storage for the bearer token.
//!
//! One token slot, three tiers: the OS keychain, a `STOCKPILE_AUTH__TOKEN`
//! environment override for CI, and a mode-0600 credentials file under the
//! home directory. Reads walk the tiers in that order and remember which
//! one answered; writes prefer the keychain and fall back to the file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const KEYRING_SERVICE: &str = "stockpile-cli";
const KEYRING_USER: &str = "api-jwt";
const ENV_TOKEN_VAR: &str = "STOCKPILE_AUTH__TOKEN";

/// Storage tier a token can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    /// Read order: the keychain wins, the env override beats the file.
    const RESOLUTION_ORDER: [Self; 3] = [Self::Keyring, Self::Env, Self::File];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token recovered from storage, tagged with the tier that held it.
/// The session keeps the tag so `stk auth status` can report it.
#[derive(Debug, Clone)]
pub struct StoredToken {
    pub token: String,
    pub source: TokenSource,
}

/// Handle on the single persisted token slot.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: String,
    credentials_file: Option<PathBuf>,
}

impl TokenStore {
    /// Store with explicit locations (tests point this at a temp dir).
    #[must_use]
    pub fn new(service: impl Into<String>, credentials_file: Option<PathBuf>) -> Self {
        Self {
            service: service.into(),
            credentials_file,
        }
    }

    /// Production store: keyring service `stockpile-cli` (overridable via
    /// `STOCKPILE_KEYRING_SERVICE` so test runs never touch real
    /// credentials) and `~/.stockpile/credentials` as the file tier.
    #[must_use]
    pub fn from_env() -> Self {
        let service =
            std::env::var("STOCKPILE_KEYRING_SERVICE").unwrap_or_else(|_| KEYRING_SERVICE.into());
        let credentials_file =
            dirs::home_dir().map(|home| home.join(".stockpile").join("credentials"));
        Self::new(service, credentials_file)
    }

    /// Persist `jwt`, overwriting whatever the slot held. Returns the tier
    /// the token landed in: the keychain when available, the credentials
    /// file otherwise.
    ///
    /// # Errors
    ///
    /// `AuthError::TokenStoreError` when the keychain rejected the write
    /// and the file fallback failed too.
    pub fn save(&self, jwt: &str) -> Result<TokenSource, AuthError> {
        let denied = match self.keyring_entry().and_then(|entry| entry.set_password(jwt)) {
            Ok(()) => return Ok(TokenSource::Keyring),
            Err(error) => error,
        };
        tracing::warn!(%denied, "keychain unavailable, writing credentials file");
        self.write_file(jwt)?;
        Ok(TokenSource::File)
    }

    /// Walk the tiers in resolution order and return the first token found,
    /// tagged with where it came from. Blank values count as absent.
    #[must_use]
    pub fn load(&self) -> Option<StoredToken> {
        TokenSource::RESOLUTION_ORDER
            .into_iter()
            .find_map(|source| self.read(source).map(|token| StoredToken { token, source }))
    }

    /// Remove the token from every tier. A missing entry is not an error; a
    /// credentials file that cannot be deleted is, since the token would
    /// silently survive logout.
    ///
    /// # Errors
    ///
    /// `AuthError::TokenStoreError` when the credentials file exists but
    /// cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if let Ok(entry) = self.keyring_entry() {
            let _ = entry.delete_credential();
        }

        let Some(path) = &self.credentials_file else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(AuthError::TokenStoreError(format!(
                "delete {}: {error}",
                path.display()
            ))),
        }
    }

    fn read(&self, source: TokenSource) -> Option<String> {
        let raw = match source {
            TokenSource::Keyring => self
                .keyring_entry()
                .and_then(|entry| entry.get_password())
                .ok(),
            TokenSource::Env => std::env::var(ENV_TOKEN_VAR).ok(),
            TokenSource::File => {
                let path = self.credentials_file.as_deref()?;
                fs::read_to_string(path).ok()
            }
        }?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn keyring_entry(&self) -> Result<keyring::Entry, keyring::Error> {
        keyring::Entry::new(&self.service, KEYRING_USER)
    }

    fn write_file(&self, jwt: &str) -> Result<(), AuthError> {
        let Some(path) = &self.credentials_file else {
            return Err(AuthError::TokenStoreError(
                "no home directory to hold a credentials file".into(),
            ));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .and_then(|()| restrict(parent, 0o700))
                .map_err(|error| {
                    AuthError::TokenStoreError(format!("prepare {}: {error}", parent.display()))
                })?;
        }
        fs::write(path, jwt)
            .and_then(|()| restrict(path, 0o600))
            .map_err(|error| {
                AuthError::TokenStoreError(format!("write {}: {error}", path.display()))
            })
    }
}

/// Credentials are secrets: owner-only permissions on Unix, a no-op where
/// mode bits do not exist.
#[cfg(unix)]
fn restrict(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn restrict(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
