use std::sync::Arc;

use axum::http::{header::COOKIE, HeaderMap};
use reqwest::cookie::{CookieStore, Jar};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use url::Url;

use crate::auth::cookie;
use crate::error::GENERIC_ERROR_MESSAGE;
use crate::models::SessionUser;
use crate::proxy::body::json_or_null;

use super::ClientError;

/// HTTP client for the portal's `/api` surface.
///
/// Cookies set by the portal land in an in-memory jar and are replayed on
/// every later request.
#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
    cookie_name: String,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: Option<SessionUser>,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .user_agent(concat!("siloam-portal-client/", env!("CARGO_PKG_VERSION")))
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            http,
            jar,
            base_url,
            cookie_name: "token".to_string(),
        })
    }

    /// Use a non-default session cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Seed the jar with an existing session token.
    pub fn with_token(self, token: &str) -> Self {
        self.jar
            .add_cookie_str(&format!("{}={}; Path=/", self.cookie_name, token), &self.base_url);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Session token currently held in the jar.
    pub fn token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, header);
        cookie::read(&headers, &self.cookie_name)
    }

    /// GET /api/auth/session
    pub async fn session(&self) -> Result<Option<SessionUser>, ClientError> {
        let envelope: UserEnvelope = self.send(self.http.get(self.url("api/auth/session")?)).await?;
        Ok(envelope.user)
    }

    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let request = self
            .http
            .post(self.url("api/auth/login")?)
            .json(&json!({ "email": email, "password": password }));
        let envelope: UserEnvelope = self.send(request).await?;

        envelope.user.ok_or_else(|| ClientError::Api {
            status: reqwest::StatusCode::UNAUTHORIZED,
            code: None,
            message: "Login returned no user".to_string(),
        })
    }

    /// POST /api/auth/logout
    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: Value = self.send(self.http.post(self.url("api/auth/logout")?)).await?;
        Ok(())
    }

    /// GET an arbitrary portal path, e.g. `/api/donors`.
    pub async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ClientError> {
        let mut request = self.http.get(self.url(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = json_or_null(&bytes);

        if !status.is_success() {
            tracing::debug!("Portal answered {}: {}", status, body);
            return Err(ClientError::Api {
                status,
                code: body.get("code").and_then(Value::as_str).map(str::to_string),
                message: body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or(GENERIC_ERROR_MESSAGE)
                    .to_string(),
            });
        }

        Ok(serde_json::from_value(body)?)
    }
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.base_url.as_str())
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}
