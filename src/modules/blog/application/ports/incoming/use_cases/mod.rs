mod create_post;
mod public_posts;
mod update_post;

pub use create_post::CreatePostUseCase;
pub use public_posts::{GetPublishedPostUseCase, ListFeaturedPostsUseCase, ListPublishedPostsUseCase};
pub use update_post::UpdatePostUseCase;
