use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::manager::{MANAGER, MANAGER_LIST};
use crate::models::Manager;
use crate::state::AppState;

/// GET /api/managers
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Manager>>> {
    let managers = state
        .backend
        .get(&["managers"])
        .query(query)
        .authorized(&session)
        .validated(&MANAGER_LIST)
        .await?;

    Ok(Json(managers))
}

/// POST /api/managers
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.post(&["managers"]).authorized(&session).body(body).relay().await
}

/// GET /api/managers/:id
pub async fn get(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<Manager>> {
    let manager = state
        .backend
        .get(&["managers", &id])
        .authorized(&session)
        .validated(&MANAGER)
        .await?;

    Ok(Json(manager))
}

/// PUT /api/managers/:id
pub async fn update(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["managers", &id]).authorized(&session).body(body).relay().await
}

/// DELETE /api/managers/:id
pub async fn delete(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    state.backend.delete(&["managers", &id]).authorized(&session).relay().await
}
