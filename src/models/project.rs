use serde::{Deserialize, Serialize};

/// Review state shared by donation and volunteer projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
    Withdrawn,
}

pub const APPROVAL_STATUSES: &[&str] = &["pending", "reviewing", "approved", "rejected", "withdrawn"];

/// Lifecycle state shared by donation and volunteer projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

pub const PROJECT_STATUSES: &[&str] = &["upcoming", "ongoing", "completed", "cancelled"];
