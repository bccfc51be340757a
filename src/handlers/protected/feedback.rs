use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::feedback::FEEDBACK_LIST;
use crate::models::Feedback;
use crate::state::AppState;

/// GET /api/feedback
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Feedback>>> {
    let feedback = state
        .backend
        .get(&["feedback"])
        .query(query)
        .authorized(&session)
        .validated(&FEEDBACK_LIST)
        .await?;

    Ok(Json(feedback))
}

/// POST /api/feedback
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.post(&["feedback"]).authorized(&session).body(body).relay().await
}

/// DELETE /api/feedback/:id
pub async fn delete(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    state.backend.delete(&["feedback", &id]).authorized(&session).relay().await
}
