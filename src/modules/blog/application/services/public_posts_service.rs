use async_trait::async_trait;
use mongodb::bson::doc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetPublishedPostUseCase, ListFeaturedPostsUseCase, ListPublishedPostsUseCase,
};
use crate::modules::blog::domain::{
    BlogPost, BlogStatus, DEFAULT_BLOG_LIMIT, FEATURED_BLOG_LIMIT, MAX_BLOG_LIMIT,
};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::{ListRequest, Record};

pub struct PublicPostsService<R>
where
    R: ContentRepository<BlogPost>,
{
    repository: R,
}

impl<R> PublicPostsService<R>
where
    R: ContentRepository<BlogPost>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn list_published(
        &self,
        request: ListRequest,
    ) -> Result<Vec<Record<BlogPost>>, ContentError> {
        let posts = self.repository.list(request).await?;
        Ok(posts.into_iter().map(Record::from).collect())
    }
}

fn published() -> ListRequest {
    ListRequest::public::<BlogPost>().matching(doc! { "status": BlogStatus::Published.as_str() })
}

#[async_trait]
impl<R> ListPublishedPostsUseCase for PublicPostsService<R>
where
    R: ContentRepository<BlogPost>,
{
    async fn execute(&self, limit: Option<i64>) -> Result<Vec<Record<BlogPost>>, ContentError> {
        let limit = limit.unwrap_or(DEFAULT_BLOG_LIMIT);
        if !(1..=MAX_BLOG_LIMIT).contains(&limit) {
            return Err(ContentError::InvalidLimit {
                value: limit,
                min: 1,
                max: MAX_BLOG_LIMIT,
            });
        }

        self.list_published(published().limit(limit)).await
    }
}

#[async_trait]
impl<R> ListFeaturedPostsUseCase for PublicPostsService<R>
where
    R: ContentRepository<BlogPost>,
{
    async fn execute(&self) -> Result<Vec<Record<BlogPost>>, ContentError> {
        let request = ListRequest::public::<BlogPost>()
            .matching(doc! { "status": BlogStatus::Published.as_str(), "featured": true })
            .limit(FEATURED_BLOG_LIMIT);

        self.list_published(request).await
    }
}

#[async_trait]
impl<R> GetPublishedPostUseCase for PublicPostsService<R>
where
    R: ContentRepository<BlogPost>,
{
    async fn execute(&self, slug: &str) -> Result<Record<BlogPost>, ContentError> {
        let filter = doc! { "slug": slug, "status": BlogStatus::Published.as_str() };

        self.repository
            .find_one(filter)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}
