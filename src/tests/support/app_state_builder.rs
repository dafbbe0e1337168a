use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::health::ReadinessProbe;
use crate::infrastructure::StoreError;
use crate::tests::support::memory_store::MemoryStore;
use crate::AppState;

pub struct AlwaysReady;

#[async_trait]
impl ReadinessProbe for AlwaysReady {
    async fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Real services over an in-memory store. Pass the store in when the test
/// needs to arrange documents or inspect what a handler wrote.
pub struct TestAppStateBuilder {
    store: MemoryStore,
    readiness: Arc<dyn ReadinessProbe + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: MemoryStore::new(),
            readiness: Arc::new(AlwaysReady),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_readiness(mut self, readiness: impl ReadinessProbe + Send + Sync + 'static) -> Self {
        self.readiness = Arc::new(readiness);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState::assemble(&self.store, self.readiness))
    }
}
