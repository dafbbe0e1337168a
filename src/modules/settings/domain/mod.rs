pub mod entities;

pub use entities::{Settings, SettingsUpdate};
