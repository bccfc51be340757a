use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::schema::{array, nullable, object, string};
use crate::validation::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub organisation: Option<String>,
}

pub static PARTNER: Lazy<Schema> = Lazy::new(|| Schema::new("Partner", partner()));

pub static PARTNER_LIST: Lazy<Schema> = Lazy::new(|| Schema::new("Partner[]", array(partner())));

fn partner() -> Value {
    object(
        &[
            ("id", string()),
            ("firstName", string()),
            ("lastName", string()),
            ("email", string()),
            ("contactNumber", nullable(string())),
            ("organisation", nullable(string())),
        ],
        &[],
    )
}
