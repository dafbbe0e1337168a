pub mod routes;

pub use routes::{
    create_experience_handler, delete_experience_handler, get_experiences_handler,
    list_admin_experiences_handler, update_experience_handler,
};
