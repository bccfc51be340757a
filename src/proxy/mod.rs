//! Forwarding of portal requests to the backend REST service.
//!
//! Handlers compose three pieces: a session extractor, a [`BackendRequest`]
//! describing the upstream call, and a terminal step that either relays the
//! backend's answer or validates it against a JSON Schema.

pub mod body;
pub mod client;
pub mod request;

pub use client::BackendClient;
pub use request::{BackendRequest, BackendResponse};
