use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
    Json,
};

use crate::error::ApiResult;
use crate::middleware::Authenticated;
use crate::models::email_campaign::{EMAIL_CAMPAIGN, EMAIL_CAMPAIGN_LIST};
use crate::models::EmailCampaign;
use crate::state::AppState;

/// GET /api/email-campaigns
pub async fn list(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Vec<EmailCampaign>>> {
    let campaigns = state
        .backend
        .get(&["email-campaigns"])
        .query(query)
        .authorized(&session)
        .validated(&EMAIL_CAMPAIGN_LIST)
        .await?;

    Ok(Json(campaigns))
}

/// POST /api/email-campaigns
pub async fn create(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.post(&["email-campaigns"]).authorized(&session).body(body).relay().await
}

/// GET /api/email-campaigns/:id
pub async fn get(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Json<EmailCampaign>> {
    let campaign = state
        .backend
        .get(&["email-campaigns", &id])
        .authorized(&session)
        .validated(&EMAIL_CAMPAIGN)
        .await?;

    Ok(Json(campaign))
}

/// PUT /api/email-campaigns/:id
pub async fn update(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state.backend.put(&["email-campaigns", &id]).authorized(&session).body(body).relay().await
}

/// DELETE /api/email-campaigns/:id
pub async fn delete(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    state.backend.delete(&["email-campaigns", &id]).authorized(&session).relay().await
}

/// POST /api/email-campaigns/:id/send
pub async fn send(
    State(state): State<AppState>,
    Authenticated(session): Authenticated,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    state
        .backend
        .post(&["email-campaigns", &id, "send"])
        .authorized(&session)
        .body(body)
        .relay()
        .await
}
