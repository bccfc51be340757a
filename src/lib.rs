pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod proxy;
pub mod routes;
pub mod state;
pub mod validation;

pub use routes::{app, with_cors};
pub use state::AppState;
