use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::{Entity, ListRequest, Record};

#[async_trait]
pub trait ListContentUseCase<T: Entity>: Send + Sync {
    async fn execute(&self, request: ListRequest) -> Result<Vec<Record<T>>, ContentError>;
}
