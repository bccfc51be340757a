use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, boolean, count, nullable, object, one_of, string, timestamp};
use crate::validation::Schema;

use super::project::{ApprovalStatus, ProjectStatus, APPROVAL_STATUSES, PROJECT_STATUSES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerProject {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub capacity: Option<u32>,
    pub approval_status: ApprovalStatus,
    pub project_status: ProjectStatus,
    /// Only sent by the backend to signed-in callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_applied: Option<bool>,
}

pub static VOLUNTEER_PROJECT: Lazy<Schema> = Lazy::new(|| Schema::new("VolunteerProject", volunteer_project()));

pub static VOLUNTEER_PROJECT_LIST: Lazy<Schema> =
    Lazy::new(|| Schema::new("VolunteerProject[]", array(volunteer_project())));

fn volunteer_project() -> Value {
    object(
        &[
            ("id", string()),
            ("title", string()),
            ("description", nullable(string())),
            ("location", string()),
            ("startDate", timestamp()),
            ("endDate", timestamp()),
            ("capacity", nullable(count())),
            ("approvalStatus", one_of(APPROVAL_STATUSES)),
            ("projectStatus", one_of(PROJECT_STATUSES)),
        ],
        &[("hasApplied", boolean())],
    )
}
