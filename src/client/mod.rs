//! TripJournal API client
//!
//! Layered leaf-first: [`models`] and [`endpoint`] are pure, [`session`]
//! holds the token, [`pipeline`] runs each HTTP exchange, and
//! [`JournalClient`] exposes the domain operations through [`JournalApi`].

use async_trait::async_trait;

use crate::error::Result;

pub mod endpoint;
#[cfg(test)]
pub mod fixtures;
pub mod journal;
pub mod models;
pub mod pipeline;
pub mod secret_store;
pub mod session;

pub use endpoint::{DEFAULT_BASE_URL, Endpoint, EndpointResolver};
pub use journal::{ClientConfig, JournalClient};
pub use models::{
    Credentials, Event, EventCreate, EventUpdate, Location, Media, MediaCreate, Token, Trip,
    TripCreate, TripUpdate,
};
pub use secret_store::{FileSecretStore, MemorySecretStore, SecretStore};
pub use session::{SessionState, SessionStore};

/// Journal service operations
///
/// Every operation except `register`, `login` and `logout` needs an
/// authenticated session and fails with `Unauthenticated` otherwise,
/// without touching the network.
#[async_trait]
pub trait JournalApi: Send + Sync {
    // ========================================================================
    // Session
    // ========================================================================

    /// Create an account; on success the returned token becomes the session.
    async fn register(&self, credentials: &Credentials) -> Result<Token>;

    /// Log in; on success the returned token becomes the session.
    async fn login(&self, credentials: &Credentials) -> Result<Token>;

    /// Drop the session locally. No network call is made.
    fn logout(&self);

    /// Clear the session if its token has expired. Returns whether it did.
    fn check_if_token_expired(&self) -> bool;

    // ========================================================================
    // Trips
    // ========================================================================

    async fn create_trip(&self, request: &TripCreate) -> Result<Trip>;

    async fn get_trips(&self) -> Result<Vec<Trip>>;

    async fn get_trip(&self, trip_id: i64) -> Result<Trip>;

    async fn update_trip(&self, trip_id: i64, request: &TripUpdate) -> Result<Trip>;

    async fn delete_trip(&self, trip_id: i64) -> Result<()>;

    // ========================================================================
    // Events
    // ========================================================================

    async fn create_event(&self, request: &EventCreate) -> Result<Event>;

    async fn update_event(&self, event_id: i64, request: &EventUpdate) -> Result<Event>;

    async fn delete_event(&self, event_id: i64) -> Result<()>;

    // ========================================================================
    // Media
    // ========================================================================

    async fn create_media(&self, request: &MediaCreate) -> Result<Media>;

    async fn delete_media(&self, media_id: i64) -> Result<()>;
}
