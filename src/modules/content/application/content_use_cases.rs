use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    CreateContentUseCase, DeleteContentUseCase, GetContentUseCase, GetSingletonUseCase,
    ListContentUseCase, UpdateContentUseCase, UpdateSingletonUseCase,
};
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::content::application::services::{
    CreateContentService, DeleteContentService, EnsureSingletonService, GetContentService,
    GetSingletonService, ListContentService, UpdateContentService, UpdateSingletonService,
};
use crate::modules::content::domain::{Entity, Validate};

/// CRUD use cases for one collection.
pub struct ContentUseCases<T: Entity> {
    pub list: Arc<dyn ListContentUseCase<T> + Send + Sync>,
    pub get: Arc<dyn GetContentUseCase<T> + Send + Sync>,
    pub create: Arc<dyn CreateContentUseCase<T> + Send + Sync>,
    pub update: Arc<dyn UpdateContentUseCase<T> + Send + Sync>,
    pub delete: Arc<dyn DeleteContentUseCase<T> + Send + Sync>,
}

// Manual impl: a derive would demand `T: Clone` on the handles.
impl<T: Entity> Clone for ContentUseCases<T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            get: self.get.clone(),
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<T: Entity + Validate> ContentUseCases<T> {
    pub fn assemble<P: RepositoryProvider>(provider: &P) -> Self {
        let repository = provider.repository::<T>();
        Self {
            list: Arc::new(ListContentService::new(repository.clone())),
            get: Arc::new(GetContentService::new(repository.clone())),
            create: Arc::new(CreateContentService::new(repository.clone())),
            update: Arc::new(UpdateContentService::new(repository.clone())),
            delete: Arc::new(DeleteContentService::new(repository)),
        }
    }
}

/// Read/update use cases for a single-document collection.
pub struct SingletonUseCases<T: Entity> {
    pub get: Arc<dyn GetSingletonUseCase<T> + Send + Sync>,
    pub update: Arc<dyn UpdateSingletonUseCase<T> + Send + Sync>,
}

impl<T: Entity> Clone for SingletonUseCases<T> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            update: self.update.clone(),
        }
    }
}

impl<T: Entity + Validate> SingletonUseCases<T> {
    /// Reads answer NotFound while the collection is empty.
    pub fn assemble<P: RepositoryProvider>(provider: &P) -> Self {
        let repository = provider.repository::<T>();
        Self {
            get: Arc::new(GetSingletonService::new(repository.clone())),
            update: Arc::new(UpdateSingletonService::new(repository)),
        }
    }
}

impl<T: Entity + Default + Validate> SingletonUseCases<T> {
    /// Reads create the default document on first access.
    pub fn assemble_with_default<P: RepositoryProvider>(provider: &P) -> Self {
        let repository = provider.repository::<T>();
        Self {
            get: Arc::new(EnsureSingletonService::new(repository.clone())),
            update: Arc::new(UpdateSingletonService::new(repository)),
        }
    }
}
