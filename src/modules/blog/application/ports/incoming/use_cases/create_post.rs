use async_trait::async_trait;

use crate::modules::blog::domain::{BlogPost, BlogPostCreate};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::Record;

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, input: BlogPostCreate) -> Result<Record<BlogPost>, ContentError>;
}
