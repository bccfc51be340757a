use axum::{
    body::Bytes,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::ApiResult;
use crate::handlers::public::session::session_cookie;
use crate::middleware::Authenticated;
use crate::state::AppState;

/// POST /api/auth/onboarding - complete the partner profile after signup
///
/// The backend may reissue the token once onboarding changes the claims. A
/// reissued token replaces the cookie and is removed from the relayed body.
pub async fn onboarding(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    let response = state
        .backend
        .post(&["auth", "onboarding"])
        .authorized(&session)
        .body(body)
        .send()
        .await?;

    let status = response.status;
    let mut value = response.json()?;
    let reissued = match value.as_object_mut().and_then(|body| body.remove("token")) {
        Some(Value::String(token)) => Some(token),
        _ => None,
    };

    let mut reply = if value.is_null() {
        status.into_response()
    } else {
        (status, Json(value)).into_response()
    };

    if let Some(token) = reissued {
        let (header, claims) = session_cookie(&state, &token)?;
        tracing::info!("Session refreshed after onboarding for user '{}'", claims.id);
        reply.headers_mut().insert(SET_COOKIE, header);
    }

    Ok(reply)
}
