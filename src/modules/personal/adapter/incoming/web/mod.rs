pub mod routes;

pub use routes::{get_admin_personal_handler, get_personal_handler, update_personal_handler};
