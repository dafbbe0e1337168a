use async_trait::async_trait;

use super::{ensure_slug_free, slug_conflict};
use crate::modules::blog::application::ports::incoming::use_cases::UpdatePostUseCase;
use crate::modules::blog::domain::published_at;
use crate::modules::blog::domain::slug::slug_from_title;
use crate::modules::blog::domain::{BlogPost, BlogPostUpdate, BlogStatus};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::services::parse_object_id;
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{FieldPatch, Record, Validate};

pub struct UpdatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    repository: R,
}

impl<R> UpdatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Slug the post should carry after `update`, if it changes.
///
/// An explicit slug always wins. Otherwise a new title regenerates it.
fn next_slug(current: &BlogPost, update: &BlogPostUpdate) -> Result<Option<String>, ContentError> {
    let candidate = match (&update.slug, &update.title) {
        (Some(slug), _) => slug.clone(),
        (None, Some(title)) if *title != current.title => slug_from_title(title)?,
        _ => return Ok(None),
    };

    Ok((candidate != current.slug).then_some(candidate))
}

#[async_trait]
impl<R> UpdatePostUseCase for UpdatePostService<R>
where
    R: ContentRepository<BlogPost>,
{
    async fn execute(
        &self,
        id: &str,
        update: BlogPostUpdate,
    ) -> Result<Record<BlogPost>, ContentError> {
        let id = parse_object_id(id)?;
        update.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ContentError::NotFound)?;

        let now = timestamp_now();
        let mut patch = FieldPatch::from_update(&update, now)?;

        let slug = next_slug(&current.content, &update)?;
        if let Some(slug) = &slug {
            ensure_slug_free(&self.repository, slug, Some(id)).await?;
            patch.set("slug", slug.as_str());
        }

        let publishing = update.status == Some(BlogStatus::Published);
        if publishing && current.content.published_at.is_none() && update.published_at.is_none() {
            patch.set("published_at", published_at::format(&now));
        }

        let final_slug = slug.unwrap_or(current.content.slug);
        self.repository
            .apply_patch(id, patch)
            .await
            .map_err(ContentError::from)
            .map_err(slug_conflict(&final_slug))?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}
