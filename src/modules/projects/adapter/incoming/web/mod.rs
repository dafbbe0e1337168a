pub mod routes;

pub use routes::{
    create_project_handler, delete_project_handler, get_featured_projects_handler,
    get_project_handler, get_projects_handler, list_admin_projects_handler,
    update_project_handler,
};
