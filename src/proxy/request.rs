use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Session;
use crate::error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};
use crate::validation::{self, Schema};

use super::body::error_message;
use super::client::BackendClient;

/// One call to the backend, built up from the inbound request.
#[must_use]
pub struct BackendRequest<'a> {
    client: &'a BackendClient,
    method: Method,
    segments: Vec<String>,
    query: Option<String>,
    token: Option<&'a str>,
    body: Option<Bytes>,
}

/// A 2xx backend answer.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl<'a> BackendRequest<'a> {
    pub(super) fn new(client: &'a BackendClient, method: Method, segments: &[&str]) -> Self {
        Self {
            client,
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: None,
            token: None,
            body: None,
        }
    }

    /// Forward the inbound query string unchanged.
    pub fn query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    /// Attach the session's bearer token.
    pub fn authorized(mut self, session: &'a Session) -> Self {
        self.token = Some(session.token.as_str());
        self
    }

    /// Attach the bearer token only when a session exists.
    pub fn maybe_authorized(mut self, session: Option<&'a Session>) -> Self {
        self.token = session.map(|s| s.token.as_str());
        self
    }

    /// Inbound body, forwarded unmodified on mutating verbs.
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    fn sends_body(&self) -> bool {
        !matches!(self.method, Method::GET | Method::HEAD)
    }

    /// Perform the call; a non-2xx status becomes [`ApiError::Backend`].
    pub async fn send(self) -> ApiResult<BackendResponse> {
        let url = self.client.endpoint(&self.segments, self.query.as_deref())?;
        let sends_body = self.sends_body();

        tracing::debug!("Proxying {} {}", self.method, url.path());

        let mut request = self
            .client
            .http()
            .request(self.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = self.body.filter(|b| sends_body && !b.is_empty()) {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!("Backend rejected {} /{}: {} {}", self.method, self.segments.join("/"), status, message);
            return Err(ApiError::backend(status, message));
        }

        Ok(BackendResponse { status, body })
    }

    /// Perform the call and return the JSON body.
    pub async fn json(self) -> ApiResult<Value> {
        self.send().await?.json()
    }

    /// Perform the call, then check and type the body against `schema`.
    pub async fn validated<T: DeserializeOwned>(self, schema: &Schema) -> ApiResult<T> {
        let value = self.json().await?;
        Ok(validation::parse(value, schema)?)
    }

    /// Perform the call and relay the backend's status and JSON verbatim.
    pub async fn relay(self) -> ApiResult<Response> {
        let response = self.send().await?;
        let status = response.status;
        let value = response.json()?;
        if value.is_null() {
            return Ok(status.into_response());
        }
        Ok((status, Json(value)).into_response())
    }
}

impl BackendResponse {
    /// Body as JSON. Empty bodies read as `null`; anything else unparsable is an error.
    pub fn json(&self) -> ApiResult<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(|e| {
            tracing::error!("Backend returned a non-JSON body with status {}: {}", self.status, e);
            ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
        })
    }
}
