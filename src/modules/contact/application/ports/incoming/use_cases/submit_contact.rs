use async_trait::async_trait;

use crate::modules::contact::domain::{ContactMessageCreate, ContactReceipt};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: ContactMessageCreate) -> Result<ContactReceipt, ContentError>;
}
