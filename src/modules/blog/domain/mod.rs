pub mod defaults;
pub mod entities;
pub mod published_at;
pub mod slug;

pub use entities::{
    BlogPost, BlogPostCreate, BlogPostUpdate, BlogStatus, DEFAULT_BLOG_LIMIT,
    FEATURED_BLOG_LIMIT, MAX_BLOG_LIMIT,
};
pub use slug::{is_valid_slug, slugify};
