pub mod defaults;
pub mod entities;

pub use entities::{Experience, ExperienceUpdate};
