use async_trait::async_trait;

use crate::modules::seed::domain::{SeedError, SeedOutcome, SeedPolicy};

/// Seeds one collection with its default content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedTask: Send + Sync {
    fn collection(&self) -> &'static str;

    fn policy(&self) -> SeedPolicy;

    async fn seed(&self) -> Result<SeedOutcome, SeedError>;
}
