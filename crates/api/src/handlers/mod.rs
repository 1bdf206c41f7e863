pub mod dashboard;
pub mod events;
pub mod icons;
pub mod layout;
pub mod me;
pub mod navigation;
pub mod profiles;
