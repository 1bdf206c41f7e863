//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table row and,
//! where the table is written to, a `Deserialize` DTO for inserts.

pub mod event;
pub mod profile;
pub mod user;
