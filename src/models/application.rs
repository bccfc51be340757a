use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, object, one_of, string, timestamp};
use crate::validation::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Withdrawn,
}

pub const APPLICATION_STATUSES: &[&str] = &["pending", "approved", "rejected", "withdrawn"];

/// A partner's application to volunteer on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    pub id: String,
    pub project_id: String,
    pub volunteer_id: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

pub static APPLICATION: Lazy<Schema> = Lazy::new(|| Schema::new("VolunteerApplication", application()));

pub static APPLICATION_LIST: Lazy<Schema> =
    Lazy::new(|| Schema::new("VolunteerApplication[]", array(application())));

fn application() -> Value {
    object(
        &[
            ("id", string()),
            ("projectId", string()),
            ("volunteerId", string()),
            ("status", one_of(APPLICATION_STATUSES)),
            ("createdAt", timestamp()),
        ],
        &[],
    )
}
