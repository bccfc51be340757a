use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::partner::{PARTNER, PARTNER_LIST};
use crate::models::Partner;
use crate::state::AppState;

/// GET /api/partners
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<Partner>>> {
    let partners = state
        .backend
        .get(&["partners"])
        .query(query)
        .authorized(&session)
        .validated(&PARTNER_LIST)
        .await?;

    Ok(Json(partners))
}

/// GET /api/partners/:id
pub async fn get(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<Partner>> {
    let partner = state
        .backend
        .get(&["partners", &id])
        .authorized(&session)
        .validated(&PARTNER)
        .await?;

    Ok(Json(partner))
}

/// GET /api/partners/profile - the signed-in partner
pub async fn profile(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
) -> ApiResult<Json<Partner>> {
    let partner = state
        .backend
        .get(&["partners", "profile"])
        .authorized(&session)
        .validated(&PARTNER)
        .await?;

    Ok(Json(partner))
}

/// PUT /api/partners/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["partners", "profile"]).authorized(&session).body(body).relay().await
}
