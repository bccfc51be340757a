// handlers/mod.rs - two tiers
//
// public:    no session needed (/, /health, /api/auth/{login,signup,logout,session})
// protected: session resolved from the cookie and forwarded to the backend (/api/*)

pub mod protected;
pub mod public;
