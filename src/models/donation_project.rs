use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, decimal, nullable, object, one_of, string, timestamp, unsigned};
use crate::validation::Schema;

use super::project::{ApprovalStatus, ProjectStatus, APPROVAL_STATUSES, PROJECT_STATUSES};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationProject {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub target_fund: Option<Decimal>,
    pub current_fund: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub approval_status: ApprovalStatus,
    pub project_status: ProjectStatus,
    /// Only sent by the backend to signed-in callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation_count: Option<u64>,
}

pub static DONATION_PROJECT: Lazy<Schema> = Lazy::new(|| Schema::new("DonationProject", donation_project()));

pub static DONATION_PROJECT_LIST: Lazy<Schema> =
    Lazy::new(|| Schema::new("DonationProject[]", array(donation_project())));

fn donation_project() -> Value {
    object(
        &[
            ("id", string()),
            ("title", string()),
            ("description", nullable(string())),
            ("location", nullable(string())),
            ("targetFund", nullable(decimal())),
            ("currentFund", decimal()),
            ("startDate", timestamp()),
            ("endDate", nullable(timestamp())),
            ("approvalStatus", one_of(APPROVAL_STATUSES)),
            ("projectStatus", one_of(PROJECT_STATUSES)),
        ],
        &[("donationCount", unsigned())],
    )
}
