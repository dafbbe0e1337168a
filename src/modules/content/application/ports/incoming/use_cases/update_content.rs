use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::{Entity, Record};

#[async_trait]
pub trait UpdateContentUseCase<T: Entity>: Send + Sync {
    /// Filtered merge of `update` onto the document with the given id.
    async fn execute(&self, id: &str, update: T::Update) -> Result<Record<T>, ContentError>;
}
