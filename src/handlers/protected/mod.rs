// handlers/protected/mod.rs - handlers that forward to the backend
//
// Every handler here resolves the session cookie first. Routes taking
// `Authenticated` answer 401 before contacting the backend; routes taking
// `OptionalSession` forward anonymously and attach the token only when the
// caller has one. Role checks belong to the backend.

pub mod applications;
pub mod donation_projects;
pub mod donations;
pub mod donors;
pub mod email_campaigns;
pub mod feedback;
pub mod managers;
pub mod onboarding;
pub mod partners;
pub mod volunteer_projects;
