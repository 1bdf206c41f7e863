//! Session extractors and the protected-route gate.
//!
//! - [`auth::AuthUser`] -- Requires a verified session, rejects with 401.
//! - [`auth::Viewer`] -- The session if there is one; never rejects.
//! - [`session_gate::session_gate`] -- Redirects session-less requests away
//!   from `/dashboard`.

pub mod auth;
pub mod session_gate;
