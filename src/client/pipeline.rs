//! Request pipeline
//!
//! Every journal operation runs through [`RequestPipeline`]: build the
//! request, attach the bearer token, dispatch, validate the status, and
//! decode the body. Login and register additionally stamp the returned
//! token's expiry and hand it to the session.

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoint::{Endpoint, EndpointResolver};
use super::models::Token;
use super::session::SessionStore;
use crate::error::{ApiError, Result};

const MIME_JSON: &str = "application/json";

/// Outgoing body encoding
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// Status codes accepted as success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Exactly 200, for calls that return a JSON body
    Ok,
    /// Any 2xx, for calls whose body is ignored
    Success,
}

impl Expect {
    fn accepts(&self, status: StatusCode) -> bool {
        match self {
            Expect::Ok => status == StatusCode::OK,
            Expect::Success => status.is_success(),
        }
    }
}

/// One HTTP exchange, described declaratively
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub endpoint: Endpoint,
    pub body: RequestBody,
    pub expect: Expect,
    pub auth: bool,
}

impl RequestSpec {
    fn new(method: Method, endpoint: Endpoint, expect: Expect) -> Self {
        Self {
            method,
            endpoint,
            body: RequestBody::Empty,
            expect,
            auth: endpoint.requires_auth(),
        }
    }

    pub fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::GET, endpoint, Expect::Ok)
    }

    pub fn post(endpoint: Endpoint) -> Self {
        Self::new(Method::POST, endpoint, Expect::Ok)
    }

    pub fn put(endpoint: Endpoint) -> Self {
        Self::new(Method::PUT, endpoint, Expect::Ok)
    }

    pub fn delete(endpoint: Endpoint) -> Self {
        Self::new(Method::DELETE, endpoint, Expect::Success)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a form-encoded body.
    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }
}

/// Shared fetch / validate / decode sequence
pub struct RequestPipeline {
    http: HttpClient,
    resolver: EndpointResolver,
    session: Arc<SessionStore>,
}

impl RequestPipeline {
    pub fn new(http: HttpClient, resolver: EndpointResolver, session: Arc<SessionStore>) -> Self {
        Self {
            http,
            resolver,
            session,
        }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Run `spec` and decode a JSON body of type `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let body = self.send(spec).await?;
        decode(&body)
    }

    /// Run `spec`, discarding the response body.
    pub async fn execute(&self, spec: RequestSpec) -> Result<()> {
        self.send(spec).await.map(|_| ())
    }

    /// Run a login/register exchange. The decoded token gets the client-side
    /// expiry and becomes the session token.
    pub async fn authenticate(&self, spec: RequestSpec) -> Result<Token> {
        let token: Token = self.fetch(spec).await?;
        let token = token.stamped(Utc::now());
        self.session.set_token(Some(token.clone()));
        Ok(token)
    }

    async fn send(&self, spec: RequestSpec) -> Result<Vec<u8>> {
        // Resolve the token before any I/O so an unauthenticated call
        // never reaches the network
        let bearer = if spec.auth {
            let token = self
                .session
                .current_token()
                .ok_or(ApiError::Unauthenticated)?;
            Some(token.bearer())
        } else {
            None
        };

        let url = self.resolver.url(spec.endpoint);
        debug!("{} {}", spec.method, url);

        let mut request = self
            .http
            .request(spec.method.clone(), url)
            .header(ACCEPT, MIME_JSON);

        if let Some(bearer) = bearer {
            request = request.header(AUTHORIZATION, bearer);
        }

        request = match &spec.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request
                .header(CONTENT_TYPE, MIME_JSON)
                .body(serde_json::to_vec(value)?),
            RequestBody::Form(fields) => request.form(fields),
        };

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !spec.expect.accepts(status) {
            let text = response.text().await.unwrap_or_default();
            debug!("{} {} failed with {}", spec.method, spec.endpoint.path(), status);
            return Err(ApiError::BadResponse {
                status: status.as_u16(),
                detail: error_detail(status, &text),
            }
            .into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::DecodeFailure(e.to_string()).into())
}

/// Human-readable reason for a rejected call: the server's `detail` field
/// when present, else the raw body, else the canonical status reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(detail) => return detail.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
