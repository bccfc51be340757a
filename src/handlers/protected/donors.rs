use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::donation::DONATION_LIST;
use crate::models::donor::{DONORS_RESPONSE, DONOR_DETAIL};
use crate::models::{Donation, DonorDetail, DonorRow, DonorsResponse};
use crate::state::AppState;

/// GET /api/donors - donor table with cumulative totals
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<DonorRow>>> {
    let response: DonorsResponse = state
        .backend
        .get(&["donors"])
        .query(query)
        .authorized(&session)
        .validated(&DONORS_RESPONSE)
        .await?;

    Ok(Json(response.into_rows()))
}

/// GET /api/donors/:id
pub async fn get(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<DonorDetail>> {
    let donor = state
        .backend
        .get(&["donors", &id])
        .authorized(&session)
        .validated(&DONOR_DETAIL)
        .await?;

    Ok(Json(donor))
}

/// PUT /api/donors/:id
pub async fn update(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["donors", &id]).authorized(&session).body(body).relay().await
}

/// GET /api/donors/:id/donations
pub async fn donations(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Donation>>> {
    let donations = state
        .backend
        .get(&["donors", &id, "donations"])
        .query(query)
        .authorized(&session)
        .validated(&DONATION_LIST)
        .await?;

    Ok(Json(donations))
}
