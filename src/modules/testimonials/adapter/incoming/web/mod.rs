pub mod routes;

pub use routes::{
    create_testimonial_handler, delete_testimonial_handler, get_testimonials_handler,
    list_admin_testimonials_handler, update_testimonial_handler,
};
