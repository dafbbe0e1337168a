use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::{Entity, Record};

#[async_trait]
pub trait GetContentUseCase<T: Entity>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Record<T>, ContentError>;
}
