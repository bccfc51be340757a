// Volunteer projects: anonymous reads, authenticated writes. The status and
// applications sub-resources always need a session.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::{Authenticated, OptionalSession};
use crate::models::application::APPLICATION_LIST;
use crate::models::volunteer_project::{VOLUNTEER_PROJECT, VOLUNTEER_PROJECT_LIST};
use crate::models::{VolunteerApplication, VolunteerProject};
use crate::state::AppState;

/// GET /api/volunteer-projects
pub async fn list(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<VolunteerProject>>> {
    let projects = state
        .backend
        .get(&["volunteer-projects"])
        .query(query)
        .maybe_authorized(session.as_ref())
        .validated(&VOLUNTEER_PROJECT_LIST)
        .await?;

    Ok(Json(projects))
}

/// POST /api/volunteer-projects
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.post(&["volunteer-projects"]).authorized(&session).body(body).relay().await
}

/// GET /api/volunteer-projects/:id
pub async fn get(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    Path(id): Path<String>,
) -> ApiResult<Json<VolunteerProject>> {
    let project = state
        .backend
        .get(&["volunteer-projects", &id])
        .maybe_authorized(session.as_ref())
        .validated(&VOLUNTEER_PROJECT)
        .await?;

    Ok(Json(project))
}

/// PUT /api/volunteer-projects/:id
pub async fn update(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["volunteer-projects", &id]).authorized(&session).body(body).relay().await
}

/// DELETE /api/volunteer-projects/:id
pub async fn delete(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    state.backend.delete(&["volunteer-projects", &id]).authorized(&session).relay().await
}

/// PATCH /api/volunteer-projects/:id/status - approve, reject or withdraw
pub async fn update_status(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<VolunteerProject>> {
    let project = state
        .backend
        .patch(&["volunteer-projects", &id, "status"])
        .authorized(&session)
        .body(body)
        .validated(&VOLUNTEER_PROJECT)
        .await?;

    Ok(Json(project))
}

/// GET /api/volunteer-projects/:id/applications
pub async fn applications(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<VolunteerApplication>>> {
    let applications = state
        .backend
        .get(&["volunteer-projects", &id, "applications"])
        .query(query)
        .authorized(&session)
        .validated(&APPLICATION_LIST)
        .await?;

    Ok(Json(applications))
}

/// POST /api/volunteer-projects/:id/applications - apply to volunteer
pub async fn apply(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state
        .backend
        .post(&["volunteer-projects", &id, "applications"])
        .authorized(&session)
        .body(body)
        .relay()
        .await
}
