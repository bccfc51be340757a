use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, decimal, nullable, object, string, timestamp};
use crate::validation::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: String,
    pub project_id: String,
    pub donor_id: Option<String>,
    /// Serialized as a string so no precision is lost on the way to the browser.
    pub amount: Decimal,
    pub donation_type: String,
    pub payment_mode: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub static DONATION: Lazy<Schema> = Lazy::new(|| Schema::new("Donation", donation()));

pub static DONATION_LIST: Lazy<Schema> = Lazy::new(|| Schema::new("Donation[]", array(donation())));

/// Also embedded in the donor detail.
pub(crate) fn donation() -> Value {
    object(
        &[
            ("id", string()),
            ("projectId", string()),
            ("donorId", nullable(string())),
            ("amount", decimal()),
            ("donationType", string()),
            ("paymentMode", nullable(string())),
            ("createdAt", timestamp()),
        ],
        &[],
    )
}
