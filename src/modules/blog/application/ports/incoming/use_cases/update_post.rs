use async_trait::async_trait;

use crate::modules::blog::domain::{BlogPost, BlogPostUpdate};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::Record;

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        update: BlogPostUpdate,
    ) -> Result<Record<BlogPost>, ContentError>;
}
