//! TripJournal API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;
use log::debug;
use reqwest::Client as HttpClient;

use super::JournalApi;
use super::endpoint::{DEFAULT_BASE_URL, Endpoint, EndpointResolver};
use super::models::{
    Credentials, Event, EventCreate, EventUpdate, Media, MediaCreate, Token, Trip, TripCreate,
    TripUpdate,
};
use super::pipeline::{RequestPipeline, RequestSpec};
use super::secret_store::{DEFAULT_APP_IDENTITY, SecretStore};
use super::session::SessionStore;
use crate::error::{ApiError, Result};

/// Idle time allowed while connecting or waiting for the next bytes
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Time allowed for a whole exchange, body transfer included
pub const RESOURCE_TIMEOUT: Duration = Duration::from_secs(60);

/// Library-level client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base address, e.g. `http://localhost:8000/`
    pub base_url: String,
    pub request_timeout: Duration,
    pub resource_timeout: Duration,
    /// Key under which the token is persisted
    pub app_identity: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            resource_timeout: RESOURCE_TIMEOUT,
            app_identity: DEFAULT_APP_IDENTITY.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// TripJournal API client
pub struct JournalClient {
    pipeline: RequestPipeline,
}

impl JournalClient {
    /// Create a client whose session is restored from `secrets`.
    pub fn new(config: &ClientConfig, secrets: Arc<dyn SecretStore>) -> Result<Self> {
        Self::with_session(config, Arc::new(SessionStore::new(secrets)))
    }

    /// Create a client sharing an existing session.
    pub fn with_session(config: &ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        let resolver = EndpointResolver::new(&config.base_url)?;

        let http = HttpClient::builder()
            .connect_timeout(config.request_timeout)
            .read_timeout(config.request_timeout)
            .timeout(config.resource_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Journal client targeting {}", resolver.base());

        Ok(Self {
            pipeline: RequestPipeline::new(http, resolver, session),
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.pipeline.session()
    }

    pub fn base_url(&self) -> &str {
        self.pipeline.resolver().base().as_str()
    }

    /// Authenticated signal: current value, then every transition.
    pub fn observe_authenticated(&self) -> impl Stream<Item = bool> + Send + 'static {
        self.session().observe_authenticated()
    }
}

#[async_trait]
impl JournalApi for JournalClient {
    async fn register(&self, credentials: &Credentials) -> Result<Token> {
        let spec = RequestSpec::post(Endpoint::Register).json(credentials)?;
        self.pipeline.authenticate(spec).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Token> {
        let spec = RequestSpec::post(Endpoint::Login).form(credentials.form_fields());
        self.pipeline.authenticate(spec).await
    }

    fn logout(&self) {
        self.session().set_token(None);
    }

    fn check_if_token_expired(&self) -> bool {
        self.session().check_expiry()
    }

    async fn create_trip(&self, request: &TripCreate) -> Result<Trip> {
        let spec = RequestSpec::post(Endpoint::Trips).json(request)?;
        self.pipeline.fetch(spec).await
    }

    async fn get_trips(&self) -> Result<Vec<Trip>> {
        self.pipeline.fetch(RequestSpec::get(Endpoint::Trips)).await
    }

    async fn get_trip(&self, trip_id: i64) -> Result<Trip> {
        self.pipeline
            .fetch(RequestSpec::get(Endpoint::Trip(trip_id)))
            .await
    }

    async fn update_trip(&self, trip_id: i64, request: &TripUpdate) -> Result<Trip> {
        let spec = RequestSpec::put(Endpoint::Trip(trip_id)).json(request)?;
        self.pipeline.fetch(spec).await
    }

    async fn delete_trip(&self, trip_id: i64) -> Result<()> {
        self.pipeline
            .execute(RequestSpec::delete(Endpoint::Trip(trip_id)))
            .await
    }

    async fn create_event(&self, request: &EventCreate) -> Result<Event> {
        let spec = RequestSpec::post(Endpoint::Events).json(request)?;
        self.pipeline.fetch(spec).await
    }

    async fn update_event(&self, event_id: i64, request: &EventUpdate) -> Result<Event> {
        let spec = RequestSpec::put(Endpoint::Event(event_id)).json(request)?;
        self.pipeline.fetch(spec).await
    }

    async fn delete_event(&self, event_id: i64) -> Result<()> {
        self.pipeline
            .execute(RequestSpec::delete(Endpoint::Event(event_id)))
            .await
    }

    async fn create_media(&self, request: &MediaCreate) -> Result<Media> {
        let spec = RequestSpec::post(Endpoint::Media).json(request)?;
        self.pipeline.fetch(spec).await
    }

    async fn delete_media(&self, media_id: i64) -> Result<()> {
        self.pipeline
            .execute(RequestSpec::delete(Endpoint::MediaItem(media_id)))
            .await
    }
}
