//! Session primitives.
//!
//! Sessions are issued by the external auth service; this server only
//! verifies access tokens and reads who the current user is.
//!
//! - [`session`] -- token lookup (header or cookie) and HS256 verification.

pub mod session;
