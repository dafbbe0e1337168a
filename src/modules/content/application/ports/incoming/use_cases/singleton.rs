use async_trait::async_trait;

use super::ContentError;
use crate::modules::content::domain::{Entity, Record};

//
// ──────────────────────────────────────────────────────────
// Singleton collections (personal info, settings)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetSingletonUseCase<T: Entity>: Send + Sync {
    async fn execute(&self) -> Result<Record<T>, ContentError>;
}

#[async_trait]
pub trait UpdateSingletonUseCase<T: Entity>: Send + Sync {
    async fn execute(&self, update: T::Update) -> Result<Record<T>, ContentError>;
}
