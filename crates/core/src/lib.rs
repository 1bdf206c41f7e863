//! Jamboree domain layer.
//!
//! Pure logic shared by the database and API crates: display formatting,
//! the instrument/genre icon table, profile and participant projections,
//! navigation intents, the layout shell and profile-page orchestration.
//! Nothing here touches the network or the database directly; backends are
//! reached through the traits in [`profile_page`] and [`event_card`].

pub mod display_time;
pub mod error;
pub mod event_card;
pub mod icons;
pub mod layout;
pub mod navigation;
pub mod participant_card;
pub mod profile;
pub mod profile_page;
pub mod types;
