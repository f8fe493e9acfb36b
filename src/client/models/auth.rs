//! Authentication models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::dates;

/// Lifetime the client assumes for every freshly issued token.
pub const TOKEN_LIFETIME_MINUTES: i64 = 5;

/// Bearer token returned by the login and register endpoints.
///
/// The service does not report an expiry; `expiration_date` is stamped by
/// the client when the token is received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The bearer credential
    pub access_token: String,

    /// Token type reported by the service (usually `bearer`)
    pub token_type: String,

    /// Client-estimated expiry
    #[serde(
        rename = "expirationDate",
        default,
        with = "dates::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Token {
    /// Expiry assigned to a token received at `received_at`.
    pub fn default_expiration(received_at: DateTime<Utc>) -> DateTime<Utc> {
        received_at + Duration::minutes(TOKEN_LIFETIME_MINUTES)
    }

    /// Stamp the default expiry relative to `received_at`, replacing any
    /// value the server may have sent.
    pub fn stamped(mut self, received_at: DateTime<Utc>) -> Self {
        self.expiration_date = Some(Self::default_expiration(received_at));
        self
    }

    /// True once `now` has reached the expiry. Tokens without an expiry
    /// never expire on the client side.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiration_date {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Username/password pair used by login and register.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Form fields for the `token` endpoint, in wire order.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("grant_type".to_string(), String::new()),
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
