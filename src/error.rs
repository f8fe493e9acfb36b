//! Error types for the TripJournal client

use thiserror::Error;

/// Result type alias for TripJournal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// The API error behind this error, if any.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors raised by the journal service client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not logged in. Run `tripjournal login` first.")]
    Unauthenticated,

    #[error("Invalid service address: {0}")]
    BadUrl(String),

    #[error("Unexpected response status {status}: {detail}")]
    BadResponse { status: u16, detail: String },

    #[error("Failed to decode response: {0}")]
    DecodeFailure(String),

    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status carried by a `BadResponse`.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the journal service".to_string())
        } else if err.is_decode() {
            ApiError::DecodeFailure(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Secret store failures. Never fatal for the in-memory session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Credential store I/O error: {0}")]
    Io(String),

    #[error("Credential store encoding error: {0}")]
    Encoding(String),

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(err: serde_yaml::Error) -> Self {
        StoreError::Encoding(err.to_string())
    }
}
