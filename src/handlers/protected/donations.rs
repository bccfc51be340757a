use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::donation::{DONATION, DONATION_LIST};
use crate::models::Donation;
use crate::state::AppState;
use crate::validation;

/// GET /api/donations
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Donation>>> {
    let donations = state
        .backend
        .get(&["donations"])
        .query(query)
        .authorized(&session)
        .validated(&DONATION_LIST)
        .await?;

    Ok(Json(donations))
}

/// POST /api/donations - record a donation; keeps the backend's status (201)
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    let response = state
        .backend
        .post(&["donations"])
        .authorized(&session)
        .body(body)
        .send()
        .await?;

    let donation: Donation = validation::parse(response.json()?, &DONATION)?;
    Ok((response.status, Json(donation)).into_response())
}

/// GET /api/donations/:id
pub async fn get(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<Donation>> {
    let donation = state
        .backend
        .get(&["donations", &id])
        .authorized(&session)
        .validated(&DONATION)
        .await?;

    Ok(Json(donation))
}
