//! Backend DTOs and the JSON Schemas they are checked against.
//!
//! Every record here is owned by the backend. The portal only reads them, so
//! the types carry no behaviour beyond the donor list transform.

pub mod application;
pub mod donation;
pub mod donation_project;
pub mod donor;
pub mod email_campaign;
pub mod feedback;
pub mod manager;
pub mod partner;
pub mod project;
pub mod session;
pub mod volunteer_project;

pub use application::VolunteerApplication;
pub use donation::Donation;
pub use donation_project::DonationProject;
pub use donor::{DonorDetail, DonorRow, DonorsResponse};
pub use email_campaign::EmailCampaign;
pub use feedback::Feedback;
pub use manager::Manager;
pub use partner::Partner;
pub use session::{SessionUser, TokenResponse};
pub use volunteer_project::VolunteerProject;
