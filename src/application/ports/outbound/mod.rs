//! Outbound ports - Interfaces that the application requires from external systems

mod repository_port;
mod storage_port;

pub use repository_port::{
    AchievementRepositoryPort, CollectionRepositoryPort, GameRepositoryPort,
    SettingsRepositoryPort,
};
pub use storage_port::{KeyValueStorePort, StorageError, StoreName};
