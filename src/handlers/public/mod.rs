// handlers/public/mod.rs - handlers that do not require a session
//
// Login and signup are the only routes that receive a token from the backend;
// everything under protected/ reads it back from the cookie they set.

pub mod health;
pub mod session;
