pub mod routes;

pub use routes::{get_settings_handler, update_settings_handler};
