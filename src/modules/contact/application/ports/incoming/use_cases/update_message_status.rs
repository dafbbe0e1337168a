use async_trait::async_trait;

use crate::modules::contact::domain::{ContactMessage, MessageStatusUpdate};
use crate::modules::content::application::ports::incoming::use_cases::ContentError;
use crate::modules::content::domain::Record;

#[async_trait]
pub trait UpdateMessageStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        update: MessageStatusUpdate,
    ) -> Result<Record<ContactMessage>, ContentError>;
}
