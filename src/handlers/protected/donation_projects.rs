// Donation projects are listed on the public site too, so reads work
// anonymously. Signed-in callers get extra fields from the backend.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::{Authenticated, OptionalSession};
use crate::models::donation_project::{DONATION_PROJECT, DONATION_PROJECT_LIST};
use crate::models::DonationProject;
use crate::state::AppState;

/// GET /api/donation-projects
pub async fn list(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<DonationProject>>> {
    let projects = state
        .backend
        .get(&["donation-projects"])
        .query(query)
        .maybe_authorized(session.as_ref())
        .validated(&DONATION_PROJECT_LIST)
        .await?;

    Ok(Json(projects))
}

/// POST /api/donation-projects
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.post(&["donation-projects"]).authorized(&session).body(body).relay().await
}

/// GET /api/donation-projects/:id
pub async fn get(
    State(state): State<AppState>,
    OptionalSession(session): OptionalSession,
    Path(id): Path<String>,
) -> ApiResult<Json<DonationProject>> {
    let project = state
        .backend
        .get(&["donation-projects", &id])
        .maybe_authorized(session.as_ref())
        .validated(&DONATION_PROJECT)
        .await?;

    Ok(Json(project))
}

/// PUT /api/donation-projects/:id
pub async fn update(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["donation-projects", &id]).authorized(&session).body(body).relay().await
}

/// DELETE /api/donation-projects/:id
pub async fn delete(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    state.backend.delete(&["donation-projects", &id]).authorized(&session).relay().await
}
