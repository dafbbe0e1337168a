pub mod routes;

pub use routes::{
    create_blog_post_handler, delete_blog_post_handler, get_blog_post_handler,
    get_blog_posts_handler, get_featured_blog_posts_handler, list_admin_blog_posts_handler,
    update_blog_post_handler,
};
