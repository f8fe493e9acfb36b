//! Endpoint resolution for the journal service
//!
//! Maps each logical target to a fully-qualified URL under a fixed base
//! address. Resolution is pure; the base address is validated once, when
//! the resolver is built.

use reqwest::Url;

use crate::error::ApiError;

/// Default service address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Logical targets exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `token` - form-encoded login
    Login,
    /// `register` - JSON registration
    Register,
    /// `trips`
    Trips,
    /// `trips/{id}`
    Trip(i64),
    /// `events`
    Events,
    /// `events/{id}`
    Event(i64),
    /// `media`
    Media,
    /// `media/{id}`
    MediaItem(i64),
}

impl Endpoint {
    /// Path relative to the service base.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "token".to_string(),
            Endpoint::Register => "register".to_string(),
            Endpoint::Trips => "trips".to_string(),
            Endpoint::Trip(id) => format!("trips/{}", id),
            Endpoint::Events => "events".to_string(),
            Endpoint::Event(id) => format!("events/{}", id),
            Endpoint::Media => "media".to_string(),
            Endpoint::MediaItem(id) => format!("media/{}", id),
        }
    }

    /// Whether calls to this endpoint carry the bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Register)
    }
}

/// Resolves endpoints against a validated base address
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    base: Url,
}

impl EndpointResolver {
    /// Build a resolver, failing with `BadUrl` if `base` is not an absolute
    /// http(s) URL.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let mut normalized = base.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let url = Url::parse(&normalized).map_err(|e| ApiError::BadUrl(format!("{base}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::BadUrl(format!(
                "{base}: unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ApiError::BadUrl(format!("{base}: missing host")));
        }

        Ok(Self { base: url })
    }

    /// The normalized base address.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Fully-qualified URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> Url {
        // Joining a plain relative path onto a validated base always succeeds
        self.base
            .join(&endpoint.path())
            .unwrap_or_else(|_| self.base.clone())
    }
}
