//! Authentication session state
//!
//! [`SessionStore`] owns the current bearer token. Every transition goes
//! through one setter which, while holding the write lock, mirrors the
//! change to the [`SecretStore`] and then notifies subscribers. Readers
//! never observe a half-applied transition.
//!
//! Two signals are published on `tokio::sync::watch` channels:
//! - authenticated: `true` while a token is held
//! - expired: raised when a token is dropped because its client-side
//!   expiry passed, either at startup or on [`SessionStore::check_expiry`]
//!
//! Watch channels keep the latest value, so a slow subscriber may skip an
//! intermediate state but never sees states out of order.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use futures::Stream;
use log::{debug, info, warn};
use tokio::sync::watch;

use super::models::Token;
use super::secret_store::SecretStore;

/// Session lifecycle derived from token presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Single source of truth for the current token
pub struct SessionStore {
    token: RwLock<Option<Token>>,
    authenticated: watch::Sender<bool>,
    expired: watch::Sender<bool>,
    expired_at_startup: bool,
    secrets: Arc<dyn SecretStore>,
}

impl SessionStore {
    /// Create a session, adopting the stored token if it is still valid.
    pub fn new(secrets: Arc<dyn SecretStore>) -> Self {
        Self::load_at(secrets, Utc::now())
    }

    /// Same as [`SessionStore::new`] with an explicit clock reading.
    pub fn load_at(secrets: Arc<dyn SecretStore>, now: DateTime<Utc>) -> Self {
        let stored = match secrets.get_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read stored token: {}", e);
                None
            }
        };

        let (token, expired_at_startup) = match stored {
            Some(token) if token.is_expired_at(now) => {
                info!("Stored token expired while away, discarding it");
                if let Err(e) = secrets.delete_token() {
                    warn!("Could not delete expired token: {}", e);
                }
                (None, true)
            }
            Some(token) => {
                debug!("Restored session from secret store");
                (Some(token), false)
            }
            None => (None, false),
        };

        let (authenticated, _) = watch::channel(token.is_some());
        let (expired, _) = watch::channel(expired_at_startup);

        Self {
            token: RwLock::new(token),
            authenticated,
            expired,
            expired_at_startup,
            secrets,
        }
    }

    /// Snapshot of the current token.
    pub fn current_token(&self) -> Option<Token> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> SessionState {
        if self.is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the token (or clear it with `None`).
    ///
    /// Persists to the secret store, then publishes the new authenticated
    /// state, before returning. Persistence failures are logged and
    /// ignored: the in-memory token stays authoritative.
    ///
    /// The write lock is held across the secret-store call, so readers on
    /// other threads wait for the store's I/O. With [`FileSecretStore`]
    /// that is one small file write per login or logout.
    ///
    /// [`FileSecretStore`]: super::secret_store::FileSecretStore
    pub fn set_token(&self, token: Option<Token>) {
        let mut slot = self.write_slot();
        self.replace_locked(&mut slot, token);
    }

    /// Drop the token if its expiry has passed, raising the expired signal.
    /// Returns whether the session expired.
    pub fn check_expiry(&self) -> bool {
        self.check_expiry_at(Utc::now())
    }

    /// Same as [`SessionStore::check_expiry`] with an explicit clock reading.
    pub fn check_expiry_at(&self, now: DateTime<Utc>) -> bool {
        let mut slot = self.write_slot();
        let expired = slot.as_ref().is_some_and(|t| t.is_expired_at(now));

        if expired {
            debug!("Session token expired");
            self.replace_locked(&mut slot, None);
            self.expired.send_replace(true);
        }

        expired
    }

    /// Whether a stored token was discarded as expired when the session
    /// was created.
    pub fn expired_at_startup(&self) -> bool {
        self.expired_at_startup
    }

    /// Whether the session-expired signal is currently raised.
    pub fn expired(&self) -> bool {
        *self.expired.borrow()
    }

    /// Receiver for the authenticated signal.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }

    /// Stream of the authenticated signal: the current value first, then
    /// every later transition. Ends when the session is dropped.
    pub fn observe_authenticated(&self) -> impl Stream<Item = bool> + Send + 'static {
        watch_stream(self.authenticated.subscribe())
    }

    /// Stream of the session-expired signal, shaped like
    /// [`SessionStore::observe_authenticated`].
    pub fn observe_expired(&self) -> impl Stream<Item = bool> + Send + 'static {
        watch_stream(self.expired.subscribe())
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Token>> {
        self.token.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace_locked(&self, slot: &mut Option<Token>, token: Option<Token>) {
        let persisted = match &token {
            Some(token) => self.secrets.save_token(token),
            None => self.secrets.delete_token(),
        };
        if let Err(e) = persisted {
            warn!("Token persistence failed, keeping in-memory session: {}", e);
        }

        let present = token.is_some();
        if present {
            self.expired.send_replace(false);
        }
        *slot = token;
        self.authenticated.send_replace(present);

        debug!(
            "Session is now {}",
            if present { "authenticated" } else { "unauthenticated" }
        );
    }
}

fn watch_stream(rx: watch::Receiver<bool>) -> impl Stream<Item = bool> + Send + 'static {
    futures::stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first {
            rx.changed().await.ok()?;
        }
        let value = *rx.borrow_and_update();
        Some((value, (rx, false)))
    })
}
