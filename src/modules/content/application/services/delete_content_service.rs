use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use super::parse_object_id;
use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, DeleteContentUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::Entity;

pub struct DeleteContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> DeleteContentService<T, R>
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
impl<T, R> DeleteContentUseCase<T> for DeleteContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    async fn execute(&self, id: &str) -> Result<(), ContentError> {
        let id = parse_object_id(id)?;

        if !self.repository.delete(id).await? {
            return Err(ContentError::NotFound);
        }

        info!("Deleted {} {}", T::LABEL, id);
        Ok(())
    }
}
