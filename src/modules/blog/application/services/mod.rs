mod create_post_service;
mod public_posts_service;
mod update_post_service;

pub use create_post_service::CreatePostService;
pub use public_posts_service::PublicPostsService;
pub use update_post_service::UpdatePostService;

use mongodb::bson::{doc, oid::ObjectId};

use crate::modules::blog::domain::BlogPost;
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::application::ports::outgoing::ContentRepository;

/// Conflict unless `slug` is unused or belongs to `owner`.
async fn ensure_slug_free<R>(
    repository: &R,
    slug: &str,
    owner: Option<ObjectId>,
) -> Result<(), ContentError>
where
    R: ContentRepository<BlogPost>,
{
    match repository.find_one(doc! { "slug": slug }).await? {
        Some(existing) if Some(existing.id) != owner => {
            Err(ContentError::SlugAlreadyExists(slug.to_string()))
        }
        _ => Ok(()),
    }
}

/// A racing writer can still hit the unique index after the pre-check.
fn slug_conflict(slug: &str) -> impl FnOnce(ContentError) -> ContentError + '_ {
    move |e| match e {
        ContentError::Duplicate(_) => ContentError::SlugAlreadyExists(slug.to_string()),
        other => other,
    }
}
