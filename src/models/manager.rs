use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::Role;
use crate::validation::schema::{array, nullable, object, string};
use crate::validation::Schema;

/// Staff account managed by the super admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Roles the portal does not know decode to `Role::Unknown`.
    pub role: Role,
    pub contact_number: Option<String>,
}

pub static MANAGER: Lazy<Schema> = Lazy::new(|| Schema::new("Manager", manager()));

pub static MANAGER_LIST: Lazy<Schema> = Lazy::new(|| Schema::new("Manager[]", array(manager())));

fn manager() -> Value {
    object(
        &[
            ("id", string()),
            ("firstName", string()),
            ("lastName", string()),
            ("email", string()),
            ("role", string()),
            ("contactNumber", nullable(string())),
        ],
        &[],
    )
}
