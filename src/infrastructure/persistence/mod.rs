//! Key-value persistence adapters
//!
//! One namespaced key-value store backs every repository. The store is
//! either SQLite (durable) or in-memory, chosen from configuration.

mod kv_repositories;
mod memory_store;
mod sqlite_store;

use std::sync::Arc;

use anyhow::{bail, Context, Result};

pub use kv_repositories::{
    KvAchievementRepository, KvCollectionRepository, KvGameRepository, KvSettingsRepository,
};
pub use memory_store::InMemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

use crate::application::ports::outbound::KeyValueStorePort;

/// Combined repository providing access to all typed repositories
#[derive(Clone)]
pub struct KvRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl KvRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Open the store named by `backend` ("sqlite" or "memory")
    pub async fn open(backend: &str, database_url: &str) -> Result<Self> {
        let store: Arc<dyn KeyValueStorePort> = match backend {
            "sqlite" => {
                let store = SqliteKeyValueStore::connect(database_url)
                    .await
                    .context("Failed to open SQLite store")?;
                tracing::info!("Connected to SQLite store: {}", database_url);
                Arc::new(store)
            }
            "memory" => {
                tracing::warn!("Using in-memory store; data is lost on shutdown");
                Arc::new(InMemoryKeyValueStore::new())
            }
            other => bail!("Unsupported storage backend: {}", other),
        };
        Ok(Self::new(store))
    }

    pub fn collection(&self) -> KvCollectionRepository {
        KvCollectionRepository::new(self.store.clone())
    }

    pub fn games(&self) -> KvGameRepository {
        KvGameRepository::new(self.store.clone())
    }

    pub fn achievements(&self) -> KvAchievementRepository {
        KvAchievementRepository::new(self.store.clone())
    }

    pub fn settings(&self) -> KvSettingsRepository {
        KvSettingsRepository::new(self.store.clone())
    }
}
