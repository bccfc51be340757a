use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "SiloamXperience Portal API",
        "version": version,
        "endpoints": {
            "auth": "/api/auth/{login,signup,logout,session,onboarding}",
            "donors": "/api/donors[/:id[/donations]]",
            "donations": "/api/donations[/:id]",
            "donation_projects": "/api/donation-projects[/:id]",
            "volunteer_projects": "/api/volunteer-projects[/:id[/status|/applications]]",
            "applications": "/api/applications[/:id/status]",
            "email_campaigns": "/api/email-campaigns[/:id[/send]]",
            "managers": "/api/managers[/:id]",
            "partners": "/api/partners[/profile|/:id]",
            "feedback": "/api/feedback[/:id]",
        }
    }))
}

/// GET /health - liveness; does not contact the backend
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
        "backendConfigured": state.backend.is_configured(),
    }))
}
