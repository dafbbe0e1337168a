use std::marker::PhantomData;

use async_trait::async_trait;

use super::parse_object_id;
use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, UpdateContentUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{Entity, FieldPatch, Record, Validate};

pub struct UpdateContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> UpdateContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> UpdateContentUseCase<T> for UpdateContentService<T, R>
where
    T: Entity + Validate,
    R: ContentRepository<T>,
{
    async fn execute(&self, id: &str, update: T::Update) -> Result<Record<T>, ContentError> {
        let id = parse_object_id(id)?;
        update.validate()?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ContentError::NotFound)?;

        let patch = FieldPatch::from_update(&update, timestamp_now())?;
        patch.preview(&existing)?.content.validate()?;

        self.repository
            .apply_patch(id, patch)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    use crate::modules::content::domain::record::to_bson_datetime;
    use crate::tests::support::content_fixtures::{backdated, note, Note, NoteUpdate};
    use crate::tests::support::memory_store::MemoryStore;

    #[tokio::test]
    async fn all_absent_update_only_advances_updated_at() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(note("keep"), 30));
        let service = UpdateContentService::new(store.repo::<Note>());

        let record = service
            .execute(&stored.id.to_hex(), NoteUpdate::default())
            .await
            .unwrap();

        assert_eq!(record.content, stored.content);
        assert_eq!(record.created_at, stored.created_at);
        assert!(record.updated_at > stored.updated_at);
    }

    #[tokio::test]
    async fn subset_update_changes_only_the_set_fields() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(note("before"), 30));
        let service = UpdateContentService::new(store.repo::<Note>());

        let update = NoteUpdate {
            title: Some("after".to_string()),
            ..Default::default()
        };
        let record = service.execute(&stored.id.to_hex(), update).await.unwrap();

        assert_eq!(record.content.title, "after");
        assert_eq!(record.content.body, stored.content.body);
        assert_eq!(record.content.tags, stored.content.tags);
        assert_eq!(record.content.score, stored.content.score);
    }

    #[tokio::test]
    async fn empty_list_is_a_real_value_not_an_absence() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(note("tagged"), 30));
        let service = UpdateContentService::new(store.repo::<Note>());

        let update = NoteUpdate {
            tags: Some(vec![]),
            ..Default::default()
        };
        let record = service.execute(&stored.id.to_hex(), update).await.unwrap();

        assert!(record.content.tags.is_empty());
    }

    #[tokio::test]
    async fn invalid_update_leaves_the_document_untouched() {
        let store = MemoryStore::new();
        let stored = store.insert_stored(backdated(note("steady"), 30));
        let service = UpdateContentService::new(store.repo::<Note>());

        let update = NoteUpdate {
            score: Some(99),
            title: Some("changed".to_string()),
            ..Default::default()
        };
        let result = service.execute(&stored.id.to_hex(), update).await;

        assert!(matches!(result, Err(ContentError::Validation(_))));
        let docs = store.documents("notes");
        assert_eq!(docs[0].get_str("title").unwrap(), "steady");
    }

    #[tokio::test]
    async fn merged_document_must_still_be_valid() {
        let store = MemoryStore::new();
        let mut blank = note("blank");
        blank.title = String::new();
        let stored = store.insert_stored(backdated(blank, 30));
        let service = UpdateContentService::new(store.repo::<Note>());

        let update = NoteUpdate {
            score: Some(7),
            ..Default::default()
        };
        let result = service.execute(&stored.id.to_hex(), update).await;

        assert!(matches!(result, Err(ContentError::Validation(_))));
        let docs = store.documents("notes");
        assert_eq!(docs[0].get_i32("score").unwrap(), 5);
        assert_eq!(
            docs[0].get_datetime("updated_at").unwrap(),
            &to_bson_datetime(stored.updated_at)
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_malformed_id_is_invalid() {
        let service = UpdateContentService::new(MemoryStore::new().repo::<Note>());

        let missing = service
            .execute(&ObjectId::new().to_hex(), NoteUpdate::default())
            .await;
        assert_eq!(missing.unwrap_err(), ContentError::NotFound);

        let malformed = service.execute("xyz", NoteUpdate::default()).await;
        assert!(matches!(malformed, Err(ContentError::InvalidId(_))));
    }
}
