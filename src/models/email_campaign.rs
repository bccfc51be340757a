use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, nullable, object, one_of, string, timestamp, unsigned};
use crate::validation::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Failed,
}

pub const CAMPAIGN_STATUSES: &[&str] = &["draft", "scheduled", "sending", "sent", "failed"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCampaign {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub status: CampaignStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<u64>,
}

pub static EMAIL_CAMPAIGN: Lazy<Schema> = Lazy::new(|| Schema::new("EmailCampaign", email_campaign()));

pub static EMAIL_CAMPAIGN_LIST: Lazy<Schema> =
    Lazy::new(|| Schema::new("EmailCampaign[]", array(email_campaign())));

fn email_campaign() -> Value {
    object(
        &[
            ("id", string()),
            ("name", string()),
            ("subject", string()),
            ("status", one_of(CAMPAIGN_STATUSES)),
            ("scheduledAt", nullable(timestamp())),
        ],
        &[("recipientCount", unsigned())],
    )
}
