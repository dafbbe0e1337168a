pub mod routes;

pub use routes::{
    create_education_handler, delete_education_handler, get_education_handler,
    list_admin_education_handler, update_education_handler,
};
