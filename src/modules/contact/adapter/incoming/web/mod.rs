pub mod routes;

pub use routes::{list_messages_handler, submit_contact_handler, update_message_status_handler};
