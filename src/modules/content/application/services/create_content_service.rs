use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, CreateContentUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::record::timestamp_now;
use crate::modules::content::domain::{Entity, Record, Stored, Validate};

pub struct CreateContentService<T, R>
where
    T: Entity + Validate,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> CreateContentService<T, R>
where
    T: Entity + Validate,
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
impl<T, R> CreateContentUseCase<T> for CreateContentService<T, R>
where
    T: Entity + Validate,
    R: ContentRepository<T>,
{
    async fn execute(&self, content: T) -> Result<Record<T>, ContentError> {
        content.validate()?;

        let stored = self
            .repository
            .insert(Stored::new(content, timestamp_now()))
            .await?;

        info!("Created {} {}", T::LABEL, stored.id);
        Ok(stored.into())
    }
}
