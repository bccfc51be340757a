//! Consumer side of the portal API.
//!
//! [`PortalClient`] talks to the portal over HTTP and keeps the session
//! cookie in its own jar, so it behaves like the browser does.
//! [`SessionService`] publishes the current user to subscribers and
//! [`LatestRequest`] discards responses that a newer request has superseded.

pub mod latest;
pub mod portal;
pub mod session;

pub use latest::LatestRequest;
pub use portal::PortalClient;
pub use session::SessionService;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid portal URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message} ({status})")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            ClientError::InvalidUrl(_) | ClientError::Decode(_) => None,
        }
    }
}
