// handlers/public/session.rs - session cookie lifecycle
//
// Tokens are issued by the backend. These handlers only move them between
// the backend's JSON responses and the browser's HTTP-only cookie.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::SET_COOKIE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::auth::{self, cookie, Claims};
use crate::error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};
use crate::middleware::OptionalSession;
use crate::models::session::{SessionUser, TokenResponse, TOKEN_RESPONSE};
use crate::state::AppState;
use crate::validation;

/// POST /api/auth/login - exchange credentials for a session cookie
pub async fn login(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let value = state.backend.post(&["auth", "login"]).body(body).json().await?;
    start_session(&state, value)
}

/// POST /api/auth/signup - register a partner and sign them in
pub async fn signup(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let value = state.backend.post(&["auth", "signup"]).body(body).json().await?;
    start_session(&state, value)
}

/// POST /api/auth/logout - drop the session cookie; the backend keeps no session to end
pub async fn logout(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, cookie::clear(&state.session))],
        Json(json!({ "success": true })),
    )
        .into_response()
}

/// GET /api/auth/session - who is logged in, or `null`
pub async fn session(OptionalSession(session): OptionalSession) -> Json<Value> {
    let user = session.as_ref().map(|s| SessionUser::from(&s.claims));
    Json(json!({ "user": user }))
}

fn start_session(state: &AppState, value: Value) -> ApiResult<Response> {
    let issued: TokenResponse = validation::parse(value, &TOKEN_RESPONSE)?;
    let (header, claims) = session_cookie(state, &issued.token)?;

    tracing::info!("Session started for user '{}' ({:?})", claims.id, claims.role);

    let mut response = Json(json!({ "user": SessionUser::from(&claims) })).into_response();
    response.headers_mut().insert(SET_COOKIE, header);
    Ok(response)
}

/// Build the `Set-Cookie` header for a freshly issued token.
///
/// The cookie lives as long as the token does, or the configured default
/// when the token has no expiry.
pub(crate) fn session_cookie(state: &AppState, token: &str) -> ApiResult<(HeaderValue, Claims)> {
    let claims = auth::decode_claims(token).map_err(|e| {
        tracing::error!("Backend issued an unreadable token: {}", e);
        ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
    })?;

    let max_age = claims
        .remaining_secs(Utc::now())
        .unwrap_or(state.session.default_max_age_secs);

    let header = HeaderValue::from_str(&cookie::issue(&state.session, token, max_age)).map_err(|e| {
        tracing::error!("Token cannot be stored in a cookie: {}", e);
        ApiError::internal_server_error(GENERIC_ERROR_MESSAGE)
    })?;

    Ok((header, claims))
}
