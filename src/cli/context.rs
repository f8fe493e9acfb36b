//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session restoration, and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{FileSecretStore, JournalApi, JournalClient};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Name of the credentials file, kept beside the config file
pub const CREDENTIALS_FILE: &str = "credentials.yaml";

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Resolved config file path
    pub config_path: PathBuf,
    /// Journal client with the stored session restored
    pub client: JournalClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, open the credentials file and build the client.
    ///
    /// The session is restored from the credentials file; a stored token
    /// that has already expired is discarded here.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_at(opts.config_ref())?;

        let client_config = config.client_config(opts.api_host_ref());
        let secrets = FileSecretStore::new(
            credentials_path(&config_path),
            client_config.app_identity.clone(),
        );
        let client = JournalClient::new(&client_config, Arc::new(secrets))?;

        let format = opts.resolve_format(config.preferences.format.as_deref());

        Ok(Self {
            config,
            config_path,
            client,
            format,
        })
    }

    /// Context for a data command: the session must be live.
    ///
    /// # Errors
    /// `SessionExpired` when the stored token expired, either before this
    /// run or just now.
    pub fn authenticated(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::new(opts)?;
        ctx.ensure_session()?;
        Ok(ctx)
    }

    /// Run the expiry check and turn an expired session into an error.
    pub fn ensure_session(&self) -> Result<()> {
        let expired_now = self.client.check_if_token_expired();
        if expired_now || self.client.session().expired_at_startup() {
            return Err(ApiError::SessionExpired.into());
        }
        Ok(())
    }
}

/// Credentials file for a given config file path
pub fn credentials_path(config_path: &std::path::Path) -> PathBuf {
    match config_path.parent() {
        Some(dir) => dir.join(CREDENTIALS_FILE),
        None => PathBuf::from(CREDENTIALS_FILE),
    }
}
