use std::marker::PhantomData;

use async_trait::async_trait;

use crate::modules::content::application::ports::{
    incoming::use_cases::{ContentError, ListContentUseCase},
    outgoing::ContentRepository,
};
use crate::modules::content::domain::{Entity, ListRequest, Record};

pub struct ListContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> ListContentService<T, R>
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
impl<T, R> ListContentUseCase<T> for ListContentService<T, R>
where
    T: Entity,
    R: ContentRepository<T>,
{
    async fn execute(&self, request: ListRequest) -> Result<Vec<Record<T>>, ContentError> {
        let documents = self.repository.list(request).await?;
        Ok(documents.into_iter().map(Record::from).collect())
    }
}
