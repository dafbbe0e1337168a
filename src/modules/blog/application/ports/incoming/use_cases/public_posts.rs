use async_trait::async_trait;

use crate::modules::blog::domain::BlogPost;
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::Record;

//
// Public reads only ever see published posts.
//

#[async_trait]
pub trait ListPublishedPostsUseCase: Send + Sync {
    /// `None` means the default page size.
    async fn execute(&self, limit: Option<i64>) -> Result<Vec<Record<BlogPost>>, ContentError>;
}

#[async_trait]
pub trait ListFeaturedPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Record<BlogPost>>, ContentError>;
}

#[async_trait]
pub trait GetPublishedPostUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Record<BlogPost>, ContentError>;
}
