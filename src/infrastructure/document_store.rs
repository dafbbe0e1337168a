use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{info, warn};

use crate::config::StoreConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("could not connect to the document store: {0}")]
    Connection(String),

    #[error("document store did not answer ping: {0}")]
    Ping(String),
}

/// One index to create at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Document,
    pub unique: bool,
}

impl IndexSpec {
    pub fn new(collection: &'static str, keys: Document) -> Self {
        Self {
            collection,
            keys,
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

//
// ──────────────────────────────────────────────────────────
// Document store
// ──────────────────────────────────────────────────────────
// Only obtainable through `connect`, so a collection can never be
// requested before the connection exists. Cloning shares the client.
//

#[derive(Clone)]
pub struct DocumentStore {
    client: Client,
    database: Database,
    disconnected: Arc<AtomicBool>,
}

impl DocumentStore {
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        let store = Self {
            client,
            database,
            disconnected: Arc::new(AtomicBool::new(false)),
        };

        store.ping().await?;
        info!("Connected to document store, database '{}'", config.database);

        Ok(store)
    }

    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection::<Document>(name)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Ping(e.to_string()))
    }

    /// Creates the given indexes. Failures are logged and skipped; returns
    /// how many were ensured.
    pub async fn ensure_indexes(&self, specs: &[IndexSpec]) -> usize {
        let mut ensured = 0;

        for spec in specs {
            let model = IndexModel::builder()
                .keys(spec.keys.clone())
                .options(IndexOptions::builder().unique(spec.unique).build())
                .build();

            match self.collection(spec.collection).create_index(model).await {
                Ok(_) => ensured += 1,
                Err(e) => warn!(
                    "Could not ensure index {:?} on {}: {}",
                    spec.keys, spec.collection, e
                ),
            }
        }

        info!("Ensured {}/{} indexes", ensured, specs.len());
        ensured
    }

    /// Closes the client. Later calls do nothing.
    pub async fn disconnect(&self) {
        if self.disconnected.swap(true, Ordering::SeqCst) {
            return;
        }

        self.client.clone().shutdown().await;
        info!("Disconnected from document store");
    }
}
