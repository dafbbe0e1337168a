use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::{Entity, Record};

#[async_trait]
pub trait CreateContentUseCase<T: Entity>: Send + Sync {
    async fn execute(&self, content: T) -> Result<Record<T>, ContentError>;
}
