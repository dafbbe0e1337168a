use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, GetSingletonUseCase, UpdateSingletonUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::record::{timestamp_now, CREATED_AT_FIELD};
use crate::modules::content::domain::{
    Entity, FieldPatch, ListRequest, Record, SortSpec, Stored, Validate,
};

/// The oldest document of a singleton collection. Extra documents are
/// reported and ignored.
async fn load_singleton<T, R>(repository: &R) -> Result<Option<Stored<T>>, ContentError>
where
    T: Entity,
    R: ContentRepository<T>,
{
    let request = ListRequest::admin::<T>()
        .sorted(SortSpec::asc(CREATED_AT_FIELD))
        .limit(2);

    let mut documents = repository.list(request).await?;
    if documents.len() > 1 {
        warn!(
            "Singleton collection '{}' holds more than one document; using the oldest",
            T::COLLECTION
        );
    }

    Ok(if documents.is_empty() {
        None
    } else {
        Some(documents.swap_remove(0))
    })
}

//
// ──────────────────────────────────────────────────────────
// Read, NotFound when absent
// ──────────────────────────────────────────────────────────
//

pub struct GetSingletonService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> GetSingletonService<T, R>
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
impl<T, R> GetSingletonUseCase<T> for GetSingletonService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    async fn execute(&self) -> Result<Record<T>, ContentError> {
        load_singleton(&self.repository)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Read, creating the default document on first access
// ──────────────────────────────────────────────────────────
//

pub struct EnsureSingletonService<T, R>
where
    T: Entity + Default,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> EnsureSingletonService<T, R>
where
    T: Entity + Default,
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
impl<T, R> GetSingletonUseCase<T> for EnsureSingletonService<T, R>
where
    T: Entity + Default,
    R: ContentRepository<T>,
{
    async fn execute(&self) -> Result<Record<T>, ContentError> {
        if let Some(existing) = load_singleton(&self.repository).await? {
            return Ok(existing.into());
        }

        // A concurrent first read may win the upsert; its document is returned.
        let candidate = Stored::new(T::default(), timestamp_now());
        let candidate_id = candidate.id;
        let current = self.repository.ensure_one(candidate).await?;

        if current.id == candidate_id {
            info!("Created default {} document", T::LABEL);
        }
        Ok(current.into())
    }
}

//
// ──────────────────────────────────────────────────────────
// Filtered merge onto the existing document
// ──────────────────────────────────────────────────────────
//

pub struct UpdateSingletonService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> UpdateSingletonService<T, R>
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
impl<T, R> UpdateSingletonUseCase<T> for UpdateSingletonService<T, R>
where
    T: Entity + Validate,
    R: ContentRepository<T>,
{
    async fn execute(&self, update: T::Update) -> Result<Record<T>, ContentError> {
        update.validate()?;

        let existing = load_singleton(&self.repository)
            .await?
            .ok_or(ContentError::NotFound)?;

        let patch = FieldPatch::from_update(&update, timestamp_now())?;
        patch.preview(&existing)?.content.validate()?;

        self.repository
            .apply_patch(existing.id, patch)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}
