pub mod routes;

pub use routes::{
    create_certification_handler, delete_certification_handler, get_certifications_handler,
    list_admin_certifications_handler, update_certification_handler,
};
