use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{self, Session};
use crate::error::ApiError;
use crate::state::AppState;

/// Extractor for routes that require a session.
///
/// Rejects with 401 before the handler runs, so the backend is never
/// contacted for anonymous callers.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Session);

/// Extractor for routes that work anonymously but forward the token when present.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<Session>);

#[async_trait]
impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        auth::resolve(&parts.headers, &state.session.cookie_name)?
            .map(Self)
            .ok_or_else(|| {
                tracing::debug!("No session for {} {}", parts.method, parts.uri.path());
                ApiError::unauthorized("Unauthorized")
            })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(auth::resolve(&parts.headers, &state.session.cookie_name)?))
    }
}
