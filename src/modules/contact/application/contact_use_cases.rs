use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactUseCase, UpdateMessageStatusUseCase,
};
use crate::modules::contact::application::services::{
    SubmitContactService, UpdateMessageStatusService,
};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::content::application::ports::incoming::use_cases::ListContentUseCase;
use crate::modules::content::application::ports::outgoing::RepositoryProvider;
use crate::modules::content::application::services::ListContentService;

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContentUseCase<ContactMessage> + Send + Sync>,
    pub update_status: Arc<dyn UpdateMessageStatusUseCase + Send + Sync>,
}

impl ContactUseCases {
    pub fn assemble<P: RepositoryProvider>(provider: &P) -> Self {
        let repository = provider.repository::<ContactMessage>();
        Self {
            submit: Arc::new(SubmitContactService::new(repository.clone())),
            list: Arc::new(ListContentService::new(repository.clone())),
            update_status: Arc::new(UpdateMessageStatusService::new(repository)),
        }
    }
}
