pub mod cookie;

use axum::http::HeaderMap;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portal roles as issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Partner,
    FinanceManager,
    GeneralManager,
    ProjectManager,
    SuperAdmin,
    #[serde(other)]
    Unknown,
}

/// Claims carried by the backend-issued session token.
///
/// The user id comes from `id`, falling back to the registered `sub` claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TokenClaims")]
pub struct Claims {
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Wire form of [`Claims`]; tokens may carry `id`, `sub` or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    role: Role,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
    #[serde(default)]
    iat: Option<i64>,
}

impl TryFrom<TokenClaims> for Claims {
    type Error = &'static str;

    fn try_from(raw: TokenClaims) -> Result<Self, Self::Error> {
        let id = raw.id.or(raw.sub).ok_or("token carries neither `id` nor `sub`")?;
        Ok(Self {
            id,
            role: raw.role,
            email: raw.email,
            first_name: raw.first_name,
            last_name: raw.last_name,
            exp: raw.exp,
            iat: raw.iat,
        })
    }
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }

    /// Seconds left before expiry, or `None` when the token never expires.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> Option<i64> {
        self.exp.map(|exp| (exp - now.timestamp()).max(0))
    }
}

/// A resolved session: the raw token to forward plus its decoded claims.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed session token: {0}")]
    MalformedToken(#[from] jsonwebtoken::errors::Error),
}

/// Decode a token's claims without checking its signature.
///
/// The backend signs and verifies tokens; the portal only needs to read who
/// the user is and when the token lapses. Expiry is handled by [`resolve`].
pub fn decode_claims(token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Resolve the session carried by the request's cookie.
///
/// No cookie, or an expired token, yields `Ok(None)`; whether that is
/// acceptable is the caller's decision. A token that cannot be decoded is an
/// error.
pub fn resolve(headers: &HeaderMap, cookie_name: &str) -> Result<Option<Session>, AuthError> {
    let Some(token) = cookie::read(headers, cookie_name) else {
        return Ok(None);
    };

    let claims = decode_claims(&token)?;
    if claims.is_expired(Utc::now()) {
        tracing::debug!("Session for user '{}' expired at {:?}", claims.id, claims.exp);
        return Ok(None);
    }

    tracing::debug!("Resolved session for user '{}' ({:?})", claims.id, claims.role);
    Ok(Some(Session { token, claims }))
}
