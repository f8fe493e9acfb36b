//! Durable token storage
//!
//! The session keeps its token in memory and mirrors it to a [`SecretStore`].
//! Two stores ship with the crate: [`FileSecretStore`], a YAML file readable
//! only by the owner, and [`MemorySecretStore`] for tests and ephemeral use.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::models::Token;
use crate::error::StoreError;

type Result<T> = std::result::Result<T, StoreError>;

/// Default identity under which tokens are stored
pub const DEFAULT_APP_IDENTITY: &str = "tripjournal";

/// Opaque key-value secret store holding at most one token per client.
pub trait SecretStore: Send + Sync {
    /// Persist `token`, replacing any previous one.
    fn save_token(&self, token: &Token) -> Result<()>;

    /// Load the stored token, if any.
    fn get_token(&self) -> Result<Option<Token>>;

    /// Remove the stored token. Removing a missing token is not an error.
    fn delete_token(&self) -> Result<()>;
}

/// Secret store backed by a YAML file with 0600 permissions.
///
/// The file maps app identities to tokens so several clients can share it.
pub struct FileSecretStore {
    path: PathBuf,
    identity: String,
}

impl FileSecretStore {
    /// Store tokens in `path` under `identity`.
    pub fn new(path: impl Into<PathBuf>, identity: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            identity: identity.into(),
        }
    }

    /// Store at the default location (`~/.tripjournal/credentials.yaml`).
    pub fn open_default(identity: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Self::default_path()?, identity))
    }

    /// Default credentials file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StoreError::Unavailable("Could not determine home directory".into()))?;
        Ok(home.join(".tripjournal").join("credentials.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Token>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, Token>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(entries)?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner read/write only, from the moment the file exists
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;

        // A file created earlier with looser bits keeps them on open
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

impl SecretStore for FileSecretStore {
    fn save_token(&self, token: &Token) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(self.identity.clone(), token.clone());
        self.write_all(&entries)
    }

    fn get_token(&self) -> Result<Option<Token>> {
        Ok(self.read_all()?.remove(&self.identity))
    }

    fn delete_token(&self) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(&self.identity).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// In-process secret store.
#[derive(Default)]
pub struct MemorySecretStore {
    token: Mutex<Option<Token>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: Token) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<Token>>> {
        self.token
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store poisoned".into()))
    }
}

impl SecretStore for MemorySecretStore {
    fn save_token(&self, token: &Token) -> Result<()> {
        *self.slot()? = Some(token.clone());
        Ok(())
    }

    fn get_token(&self) -> Result<Option<Token>> {
        Ok(self.slot()?.clone())
    }

    fn delete_token(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
