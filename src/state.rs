use crate::config::{AppConfig, SessionConfig};
use crate::proxy::BackendClient;

/// Immutable per-process state shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub backend: BackendClient,
    pub session: SessionConfig,
}

impl AppState {
    pub fn new(backend: BackendClient, session: SessionConfig) -> Self {
        Self { backend, session }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(BackendClient::from_config(&config.backend), config.session.clone())
    }
}
