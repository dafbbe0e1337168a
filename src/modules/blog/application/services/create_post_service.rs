use async_trait::async_trait;
use tracing::info;

use super::{ensure_slug_free, slug_conflict};
use crate::modules::blog::application::ports::incoming::use_cases::CreatePostUseCase;
use crate::modules::blog::domain::slug::slug_from_title;
use crate::modules::blog::domain::{BlogPost, BlogPostCreate, BlogStatus};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{Record, Stored, Validate};

pub struct CreatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    async fn execute(&self, input: BlogPostCreate) -> Result<Record<BlogPost>, ContentError> {
        input.validate()?;

        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => slug_from_title(&input.title)?,
        };
        ensure_slug_free(&self.repository, &slug, None).await?;

        let now = timestamp_now();
        let mut post = input.into_post(slug.clone());
        if post.status == BlogStatus::Published && post.published_at.is_none() {
            post.published_at = Some(now);
        }

        let stored = self
            .repository
            .insert(Stored::new(post, now))
            .await
            .map_err(ContentError::from)
            .map_err(slug_conflict(&slug))?;

        info!("Created blog post '{}' ({})", slug, stored.id);
        Ok(stored.into())
    }
}
