use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::auth::{Claims, Role};
use crate::validation::schema::{object, string};
use crate::validation::Schema;

/// Body returned by the backend's login, signup and onboarding endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

pub static TOKEN_RESPONSE: Lazy<Schema> =
    Lazy::new(|| Schema::new("TokenResponse", object(&[("token", string())], &[])));

/// The logged-in user as exposed to the browser. Never includes the token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&Claims> for SessionUser {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.id.clone(),
            role: claims.role,
            email: claims.email.clone(),
            first_name: claims.first_name.clone(),
            last_name: claims.last_name.clone(),
            expires_at: claims.expires_at(),
        }
    }
}
