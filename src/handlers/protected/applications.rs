use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::application::{APPLICATION, APPLICATION_LIST};
use crate::models::VolunteerApplication;
use crate::state::AppState;

/// GET /api/applications - the caller's own volunteer applications
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<VolunteerApplication>>> {
    let applications = state
        .backend
        .get(&["applications"])
        .query(query)
        .authorized(&session)
        .validated(&APPLICATION_LIST)
        .await?;

    Ok(Json(applications))
}

/// PATCH /api/applications/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<VolunteerApplication>> {
    let application = state
        .backend
        .patch(&["applications", &id, "status"])
        .authorized(&session)
        .body(body)
        .validated(&APPLICATION)
        .await?;

    Ok(Json(application))
}
