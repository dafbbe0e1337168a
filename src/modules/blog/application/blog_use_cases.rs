use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreatePostUseCase, GetPublishedPostUseCase, ListFeaturedPostsUseCase,
    ListPublishedPostsUseCase, UpdatePostUseCase,
};
use crate::modules::blog::application::services::{
    CreatePostService, PublicPostsService, UpdatePostService,
};
use crate::modules::blog::domain::BlogPost;
use crate::modules::content::application::ports::incoming::use_cases::{
    DeleteContentUseCase, ListContentUseCase,
};
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::content::application::services::{DeleteContentService, ListContentService};

#[derive(Clone)]
pub struct BlogUseCases {
    pub published: Arc<dyn ListPublishedPostsUseCase + Send + Sync>,
    pub featured: Arc<dyn ListFeaturedPostsUseCase + Send + Sync>,
    pub by_slug: Arc<dyn GetPublishedPostUseCase + Send + Sync>,
    pub list: Arc<dyn ListContentUseCase<BlogPost> + Send + Sync>,
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContentUseCase<BlogPost> + Send + Sync>,
}

impl BlogUseCases {
    pub fn assemble<P: RepositoryProvider>(provider: &P) -> Self {
        let repository = provider.repository::<BlogPost>();
        let public = Arc::new(PublicPostsService::new(repository.clone()));

        Self {
            published: public.clone(),
            featured: public.clone(),
            by_slug: public,
            list: Arc::new(ListContentService::new(repository.clone())),
            create: Arc::new(CreatePostService::new(repository.clone())),
            update: Arc::new(UpdatePostService::new(repository.clone())),
            delete: Arc::new(DeleteContentService::new(repository)),
        }
    }
}
