#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use siloam_portal::config::SessionConfig;
use siloam_portal::proxy::BackendClient;
use siloam_portal::AppState;

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<(Method, String), (StatusCode, String)>>,
    requests: Mutex<Vec<Recorded>>,
}

/// In-process stand-in for the backend REST service.
pub struct MockBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;

        let state = Arc::new(MockState::default());
        let router = Router::new().fallback(record).with_state(state.clone());
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self { base_url: format!("http://127.0.0.1:{}", port), state })
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn on(&self, method: Method, path: &str, status: StatusCode, body: Value) -> &Self {
        self.on_raw(method, path, status, &body.to_string())
    }

    /// Answer `method path` with `status` and a raw body (may be empty).
    pub fn on_raw(&self, method: Method, path: &str, status: StatusCode, body: &str) -> &Self {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("backend received no request")
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_str = |name: header::HeaderName| {
        headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
    };

    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body,
    });

    let reply = state.replies.lock().unwrap().get(&(method, uri.path().to_string())).cloned();
    match reply {
        Some((status, body)) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" }))).into_response(),
    }
}

/// Portal router pointed at `backend` with the default cookie settings.
pub fn portal(backend: &MockBackend) -> Router {
    portal_at(&backend.base_url)
}

/// Portal router pointed at an arbitrary backend URL.
pub fn portal_at(base_url: &str) -> Router {
    siloam_portal::app(AppState::new(BackendClient::new(Some(base_url)), SessionConfig::default()))
}

/// Portal router with no backend configured.
pub fn portal_without_backend() -> Router {
    siloam_portal::app(AppState::new(BackendClient::new(None), SessionConfig::default()))
}

/// Serve the portal on a free port and return its base URL.
pub async fn serve_portal(backend: &MockBackend) -> Result<String> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    let router = portal(backend);
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://127.0.0.1:{}", port))
}

/// Backend-style token; the portal never checks the signature.
pub fn token(id: &str, role: &str, ttl_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = json!({
        "id": id,
        "role": role,
        "email": format!("{}@example.org", id),
        "firstName": "Test",
        "lastName": "User",
        "iat": now,
        "exp": now + ttl_secs,
    });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret")).unwrap()
}

pub fn session_cookie(token: &str) -> String {
    format!("token={}", token)
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub raw: Bytes,
}

impl Reply {
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Drive one request through `app`.
pub async fn call(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Result<Reply> {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => request.body(Body::empty())?,
    };

    let response = app.oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

    Ok(Reply { status, headers, body, raw })
}

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Result<Reply> {
    call(app, Method::GET, uri, cookie, None).await
}
