//! Key-value storage port - Namespaced persistence for user data
//!
//! Every piece of user data lives in one of a fixed set of stores, as JSON
//! text keyed by a string. Typed repositories are layered on top of this
//! port; services never talk to it directly.

use std::fmt;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreName {
    Collection,
    Games,
    Achievements,
    Settings,
}

impl StoreName {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreName::Collection => "collection",
            StoreName::Games => "games",
            StoreName::Achievements => "achievements",
            StoreName::Settings => "settings",
        }
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage failure, classified by the kind of operation that failed
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read from {store}: {message}")]
    Read { store: StoreName, message: String },
    #[error("Failed to write to {store}: {message}")]
    Write { store: StoreName, message: String },
    #[error("Failed to delete from {store}: {message}")]
    Delete { store: StoreName, message: String },
}

impl StorageError {
    pub fn read(store: StoreName, err: impl fmt::Display) -> Self {
        StorageError::Read {
            store,
            message: err.to_string(),
        }
    }

    pub fn write(store: StoreName, err: impl fmt::Display) -> Self {
        StorageError::Write {
            store,
            message: err.to_string(),
        }
    }

    pub fn delete(store: StoreName, err: impl fmt::Display) -> Self {
        StorageError::Delete {
            store,
            message: err.to_string(),
        }
    }
}

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    async fn get(&self, store: StoreName, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite
    async fn set(&self, store: StoreName, key: &str, value: String) -> Result<(), StorageError>;

    /// Removing a missing key is not an error
    async fn remove(&self, store: StoreName, key: &str) -> Result<(), StorageError>;

    /// Every value in the store, ordered by key
    async fn values(&self, store: StoreName) -> Result<Vec<String>, StorageError>;

    async fn clear(&self, store: StoreName) -> Result<(), StorageError>;
}
