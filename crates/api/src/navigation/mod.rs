//! Per-viewer navigation intent channels.
//!
//! Each authenticated viewer gets their own
//! [`NavigationBus`](jamboree_core::navigation::NavigationBus); intents
//! published for one viewer never reach another. Clients follow their
//! channel through the server-sent event stream in
//! [`handlers::navigation`](crate::handlers::navigation).

pub mod hub;
pub mod stream;

pub use hub::NavigationHub;
