pub mod defaults;
pub mod entities;

pub use entities::{AvailabilityStatus, PersonalInfo, PersonalInfoUpdate};
