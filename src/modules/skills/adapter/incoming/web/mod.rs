pub mod routes;

pub use routes::{
    create_skill_handler, delete_skill_handler, get_skills_handler, list_admin_skills_handler,
    update_skill_handler,
};
