use axum::http::Method;
use std::time::Duration;
use url::Url;

use crate::config::BackendConfig;
use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};

use super::request::BackendRequest;

/// Shared HTTP client for the backend REST service.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Option<Url>,
}

impl BackendClient {
    pub fn new(base_url: Option<&str>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn from_config(config: &BackendConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("siloam-portal/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build().unwrap_or_else(|e| {
            tracing::error!("Failed to build backend client, using defaults: {}", e);
            reqwest::Client::new()
        });

        Self::with_http(config.base_url.as_deref(), http)
    }

    fn with_http(base_url: Option<&str>, http: reqwest::Client) -> Self {
        let base_url = base_url.and_then(|raw| match Url::parse(raw) {
            Ok(url) if !url.cannot_be_a_base() => Some(url),
            Ok(_) => {
                tracing::error!("BACKEND_URL '{}' cannot be used as a base URL", raw);
                None
            }
            Err(e) => {
                tracing::error!("BACKEND_URL '{}' is invalid: {}", raw, e);
                None
            }
        });

        Self { http, base_url }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Backend URL for `segments` (each percent-encoded) plus an optional raw query.
    pub fn endpoint(&self, segments: &[String], query: Option<&str>) -> Result<Url, ApiError> {
        let Some(base) = self.base_url.as_ref() else {
            tracing::error!("BACKEND_URL is not configured");
            return Err(ApiError::internal_server_error(GENERIC_ERROR_MESSAGE));
        };

        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::internal_server_error(GENERIC_ERROR_MESSAGE))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        url.set_query(query.filter(|q| !q.is_empty()));

        Ok(url)
    }

    pub fn request(&self, method: Method, segments: &[&str]) -> BackendRequest<'_> {
        BackendRequest::new(self, method, segments)
    }

    pub fn get(&self, segments: &[&str]) -> BackendRequest<'_> {
        self.request(Method::GET, segments)
    }

    pub fn post(&self, segments: &[&str]) -> BackendRequest<'_> {
        self.request(Method::POST, segments)
    }

    pub fn put(&self, segments: &[&str]) -> BackendRequest<'_> {
        self.request(Method::PUT, segments)
    }

    pub fn patch(&self, segments: &[&str]) -> BackendRequest<'_> {
        self.request(Method::PATCH, segments)
    }

    pub fn delete(&self, segments: &[&str]) -> BackendRequest<'_> {
        self.request(Method::DELETE, segments)
    }
}
