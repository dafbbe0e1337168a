use std::marker::PhantomData;

use async_trait::async_trait;

use super::parse_object_id;
use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, GetContentUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::{Entity, Record};

pub struct GetContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> GetContentService<T, R>
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
impl<T, R> GetContentUseCase<T> for GetContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    async fn execute(&self, id: &str) -> Result<Record<T>, ContentError> {
        let id = parse_object_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .map(Record::from)
            .ok_or(ContentError::NotFound)
    }
}
