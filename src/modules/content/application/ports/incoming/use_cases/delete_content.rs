use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::Entity;

#[async_trait]
pub trait DeleteContentUseCase<T: Entity>: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), ContentError>;
}
