use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::validation::schema::{array, nullable, number, object, string};
use crate::validation::Schema;

use super::donation::{donation, Donation};

/// Status shown for donors the backend does not flag otherwise.
pub const DEFAULT_DONOR_STATUS: &str = "Active";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorsResponse {
    pub donors_with_totals: Vec<DonorListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorListEntry {
    pub user: DonorUser,
    pub total_donations: Number,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub managed_donation_projects: Vec<ManagedProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManagedProject {
    pub title: String,
}

/// One row of the finance manager's donor table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRow {
    pub donor_id: String,
    pub partner_name: String,
    pub projects: Vec<String>,
    pub cumulative_amount: Number,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub status: String,
}

impl From<DonorListEntry> for DonorRow {
    fn from(entry: DonorListEntry) -> Self {
        let user = entry.user;
        Self {
            donor_id: user.id,
            partner_name: format!("{} {}", user.first_name, user.last_name).trim().to_string(),
            projects: user.managed_donation_projects.into_iter().map(|p| p.title).collect(),
            cumulative_amount: entry.total_donations,
            gender: entry.gender,
            contact_number: entry.contact_number,
            status: entry.status.unwrap_or_else(|| DEFAULT_DONOR_STATUS.to_string()),
        }
    }
}

impl DonorsResponse {
    pub fn into_rows(self) -> Vec<DonorRow> {
        self.donors_with_totals.into_iter().map(DonorRow::from).collect()
    }
}

pub static DONORS_RESPONSE: Lazy<Schema> = Lazy::new(|| {
    let user = object(
        &[
            ("id", string()),
            ("firstName", string()),
            ("lastName", string()),
            ("managedDonationProjects", array(object(&[("title", string())], &[]))),
        ],
        &[],
    );
    let entry = object(
        &[
            ("user", user),
            ("totalDonations", number()),
            ("gender", nullable(string())),
            ("contactNumber", nullable(string())),
        ],
        &[("status", nullable(string()))],
    );

    Schema::new("DonorsResponse", object(&[("donorsWithTotals", array(entry))], &[]))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDetail {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub gender: Option<String>,
    pub total_donations: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donations: Option<Vec<Donation>>,
}

pub static DONOR_DETAIL: Lazy<Schema> = Lazy::new(|| Schema::new("DonorDetail", donor_detail()));

fn donor_detail() -> Value {
    object(
        &[
            ("id", string()),
            ("firstName", string()),
            ("lastName", string()),
            ("email", string()),
            ("contactNumber", nullable(string())),
            ("gender", nullable(string())),
            ("totalDonations", number()),
        ],
        &[("donations", array(donation()))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;
    use serde_json::json;

    #[test]
    fn builds_rows_from_backend_totals() {
        let value = json!({
            "donorsWithTotals": [{
                "user": {
                    "id": "u7",
                    "firstName": "Grace",
                    "lastName": "Tan",
                    "managedDonationProjects": [{ "id": "p1", "title": "Clean Water" }]
                },
                "totalDonations": 250.5,
                "gender": null,
                "contactNumber": "999",
                "status": "Inactive"
            }]
        });

        let rows = validation::parse::<DonorsResponse>(value, &DONORS_RESPONSE).unwrap().into_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].partner_name, "Grace Tan");
        assert_eq!(rows[0].projects, vec!["Clean Water".to_string()]);
        assert_eq!(rows[0].status, "Inactive");
        assert_eq!(serde_json::to_value(&rows[0]).unwrap()["cumulativeAmount"], json!(250.5));
    }

    #[test]
    fn missing_totals_are_reported() {
        let value = json!({ "donorsWithTotals": [{ "user": { "id": "u1" } }] });
        let err = validation::parse::<DonorsResponse>(value, &DONORS_RESPONSE).unwrap_err();
        let locations: Vec<String> = err.issues.iter().map(|i| i.location()).collect();
        assert!(locations.contains(&"$.donorsWithTotals[0].user.firstName".to_string()));
        assert!(locations.contains(&"$.donorsWithTotals[0].totalDonations".to_string()));
    }

    #[test]
    fn embedded_donations_are_checked() {
        let value = json!({
            "id": "u1",
            "firstName": "Ada",
            "lastName": "Lim",
            "email": "ada@example.org",
            "contactNumber": null,
            "gender": null,
            "totalDonations": 10,
            "donations": [{ "id": "d1" }]
        });
        let err = validation::check(&value, &DONOR_DETAIL).unwrap_err();
        assert!(err.issues.iter().any(|i| i.location() == "$.donations[0].amount"));
    }
}
