// src/modules/content/application/ports/outgoing/content_repository.rs

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::modules::content::domain::{Entity, FieldPatch, ListRequest, RecordError, Stored};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// A unique index rejected the write (e.g. blog slug).
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<RecordError> for RepositoryError {
    fn from(e: RecordError) -> Self {
        RepositoryError::SerializationError(e.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Port (one collection, single-document operations only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentRepository<T: Entity>: Send + Sync {
    /// Inserts a new document; both timestamps are stamped by the caller
    /// through [`Stored::new`].
    async fn insert(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Stored<T>>, RepositoryError>;

    /// First document matching an equality filter.
    async fn find_one(&self, filter: Document) -> Result<Option<Stored<T>>, RepositoryError>;

    async fn list(&self, request: ListRequest) -> Result<Vec<Stored<T>>, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Field-level `$set` merge keyed by id.
    /// Returns `None` when the id matched nothing.
    async fn apply_patch(
        &self,
        id: ObjectId,
        patch: FieldPatch,
    ) -> Result<Option<Stored<T>>, RepositoryError>;

    /// Hard delete. Returns `false` when the id matched nothing.
    async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError>;

    /// Single-document collections: writes `document` only while the
    /// collection is empty, as one atomic step, and returns whichever
    /// document the collection holds afterwards.
    async fn ensure_one(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError>;
}

#[async_trait]
impl<T, R> ContentRepository<T> for Arc<R>
where
    T: Entity,
    R: ContentRepository<T> + ?Sized,
{
    async fn insert(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        (**self).insert(document).await
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Stored<T>>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Stored<T>>, RepositoryError> {
        (**self).find_one(filter).await
    }

    async fn list(&self, request: ListRequest) -> Result<Vec<Stored<T>>, RepositoryError> {
        (**self).list(request).await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        (**self).count().await
    }

    async fn apply_patch(
        &self,
        id: ObjectId,
        patch: FieldPatch,
    ) -> Result<Option<Stored<T>>, RepositoryError> {
        (**self).apply_patch(id, patch).await
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepositoryError> {
        (**self).delete(id).await
    }

    async fn ensure_one(&self, document: Stored<T>) -> Result<Stored<T>, RepositoryError> {
        (**self).ensure_one(document).await
    }
}

/// Hands out a repository per entity type over one shared connection.
pub trait RepositoryProvider {
    fn repository<T: Entity>(&self) -> Arc<dyn ContentRepository<T>>;
}
