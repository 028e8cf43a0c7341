//! Core domain types

pub mod preferences;
pub mod property;
pub mod region;

pub use preferences::{Preferences, PropertyType};
pub use property::Property;
pub use region::Region;
