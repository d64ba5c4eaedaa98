use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{KeyValueStorePort, StorageError, StoreName};

/// Volatile key-value stores, used for tests and the `memory` backend
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    stores: RwLock<BTreeMap<StoreName, BTreeMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, store: StoreName, key: &str) -> Result<Option<String>, StorageError> {
        let stores = self.stores.read().await;
        Ok(stores.get(&store).and_then(|entries| entries.get(key)).cloned())
    }

    async fn set(&self, store: StoreName, key: &str, value: String) -> Result<(), StorageError> {
        let mut stores = self.stores.write().await;
        stores.entry(store).or_default().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, store: StoreName, key: &str) -> Result<(), StorageError> {
        let mut stores = self.stores.write().await;
        if let Some(entries) = stores.get_mut(&store) {
            entries.remove(key);
        }
        Ok(())
    }

    async fn values(&self, store: StoreName) -> Result<Vec<String>, StorageError> {
        let stores = self.stores.read().await;
        Ok(stores
            .get(&store)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn clear(&self, store: StoreName) -> Result<(), StorageError> {
        self.stores.write().await.remove(&store);
        Ok(())
    }
}
