use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, integer, nullable, object, string, timestamp};
use crate::validation::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub partner_id: String,
    pub rating: i64,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub static FEEDBACK: Lazy<Schema> = Lazy::new(|| Schema::new("Feedback", feedback()));

pub static FEEDBACK_LIST: Lazy<Schema> = Lazy::new(|| Schema::new("Feedback[]", array(feedback())));

fn feedback() -> Value {
    object(
        &[
            ("id", string()),
            ("partnerId", string()),
            ("rating", integer()),
            ("comments", nullable(string())),
            ("createdAt", timestamp()),
        ],
        &[],
    )
}
