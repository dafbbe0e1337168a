use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::infrastructure::DocumentStore;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, RepositoryError, RepositoryProvider,
};
use crate::modules::content::domain::{Entity, FieldPatch, ListRequest, Stored};

// ============================================================================
// Repository Implementation
// ============================================================================

pub struct MongoContentRepository<T> {
    collection: Collection<Document>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> MongoContentRepository<T> {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(T::COLLECTION),
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for MongoContentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity> ContentRepository<T> for MongoContentRepository<T> {
    async fn insert(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        let doc = document.to_document()?;

        self.collection
            .insert_one(doc)
            .await
            .map_err(map_write_err)?;

        Ok(document)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Stored<T>>, RepositoryError> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Stored<T>>, RepositoryError> {
        let found = self
            .collection
            .find_one(filter)
            .await
            .map_err(map_db_err)?;

        decode_optional(found)
    }

    async fn list(&self, request: ListRequest) -> Result<Vec<Stored<T>>, RepositoryError> {
        let mut find = self.collection.find(request.filter).limit(request.limit);
        if let Some(sort) = &request.sort {
            find = find.sort(sort.to_document());
        }

        let docs: Vec<Document> = find
            .await
            .map_err(map_db_err)?
            .try_collect()
            .await
            .map_err(map_db_err)?;

        docs.into_iter()
            .map(|doc| Stored::from_document(doc).map_err(RepositoryError::from))
            .collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(map_db_err)
    }

    async fn apply_patch(
        &self,
        id: ObjectId,
        patch: FieldPatch,
    ) -> Result<Option<Stored<T>>, RepositoryError> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, patch.into_update())
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_err)?;

        decode_optional(updated)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_db_err)?;

        Ok(result.deleted_count > 0)
    }

    async fn ensure_one(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        let defaults = document.to_document()?;

        let current = self
            .collection
            .find_one_and_update(doc! {}, doc! { "$setOnInsert": defaults })
            .upsert(true)
            .sort(doc! { "created_at": 1, "_id": 1 })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_err)?;

        decode_optional(current)?.ok_or_else(|| {
            RepositoryError::DatabaseError(format!(
                "upsert on '{}' returned no document",
                T::COLLECTION
            ))
        })
    }
}

impl RepositoryProvider for DocumentStore {
    fn repository<T: Entity>(&self) -> Arc<dyn ContentRepository<T>> {
        Arc::new(MongoContentRepository::<T>::new(self))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn decode_optional<T: Entity>(doc: Option<Document>) -> Result<Option<Stored<T>>, RepositoryError> {
    doc.map(Stored::from_document)
        .transpose()
        .map_err(RepositoryError::from)
}

fn is_duplicate_key(message: &str) -> bool {
    message.contains("E11000") || message.to_lowercase().contains("duplicate key")
}

fn map_write_err(e: mongodb::error::Error) -> RepositoryError {
    let msg = e.to_string();

    if is_duplicate_key(&msg) {
        RepositoryError::DuplicateKey(msg)
    } else {
        RepositoryError::DatabaseError(msg)
    }
}

fn map_db_err(e: mongodb::error::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_messages_are_recognised() {
        assert!(is_duplicate_key(
            "E11000 duplicate key error collection: portfolio.blog_posts index: slug_1 dup key: { slug: \"hello\" }"
        ));
        assert!(is_duplicate_key("Write error: Duplicate Key on slug"));
        assert!(!is_duplicate_key("connection reset by peer"));
    }

    #[test]
    fn undecodable_document_is_a_serialization_error() {
        let result = decode_optional::<crate::tests::support::content_fixtures::Note>(Some(
            doc! { "title": "no id" },
        ));

        assert!(matches!(result, Err(RepositoryError::SerializationError(_))));
    }

    #[test]
    fn missing_document_decodes_to_none() {
        let result =
            decode_optional::<crate::tests::support::content_fixtures::Note>(None).unwrap();
        assert!(result.is_none());
    }
}
