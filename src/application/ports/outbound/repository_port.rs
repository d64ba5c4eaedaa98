//! Repository ports - Typed access to stored user data
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::entities::{
    Achievement, AchievementUpdate, CollectionItem, GameRecord, GameRecordUpdate, NewGameRecord,
};
use crate::domain::value_objects::{AchievementId, AppSettings, GameId, ProductId};

// =============================================================================
// Collection Repository Port
// =============================================================================

#[async_trait]
pub trait CollectionRepositoryPort: Send + Sync {
    /// All stored collection items, owned or not
    async fn list(&self) -> Result<Vec<CollectionItem>, StorageError>;

    /// Ids of owned products
    async fn owned_ids(&self) -> Result<Vec<ProductId>, StorageError>;

    async fn add(&self, product_id: &ProductId) -> Result<(), StorageError>;

    async fn remove(&self, product_id: &ProductId) -> Result<(), StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;

    /// Store every item, overwriting existing entries with the same id
    async fn save_all(&self, items: &[CollectionItem]) -> Result<(), StorageError>;
}

// =============================================================================
// Game Repository Port
// =============================================================================

#[async_trait]
pub trait GameRepositoryPort: Send + Sync {
    async fn list(&self) -> Result<Vec<GameRecord>, StorageError>;

    async fn get(&self, id: GameId) -> Result<Option<GameRecord>, StorageError>;

    /// Store a new game under a freshly assigned id
    async fn create(&self, game: NewGameRecord) -> Result<GameRecord, StorageError>;

    /// Returns `None` when no game has the id
    async fn update(
        &self,
        id: GameId,
        update: GameRecordUpdate,
    ) -> Result<Option<GameRecord>, StorageError>;

    /// Returns whether a game was removed
    async fn delete(&self, id: GameId) -> Result<bool, StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;

    async fn save_all(&self, games: &[GameRecord]) -> Result<(), StorageError>;

    /// Up to `count` games, newest first by date
    async fn recent(&self, count: usize) -> Result<Vec<GameRecord>, StorageError>;
}

// =============================================================================
// Achievement Repository Port
// =============================================================================

#[async_trait]
pub trait AchievementRepositoryPort: Send + Sync {
    async fn list(&self) -> Result<Vec<Achievement>, StorageError>;

    async fn get(&self, id: &AchievementId) -> Result<Option<Achievement>, StorageError>;

    async fn add(&self, achievement: &Achievement) -> Result<(), StorageError>;

    async fn update(
        &self,
        id: &AchievementId,
        update: AchievementUpdate,
    ) -> Result<Option<Achievement>, StorageError>;

    async fn delete(&self, id: &AchievementId) -> Result<bool, StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;

    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), StorageError>;
}

// =============================================================================
// Settings Repository Port
// =============================================================================

#[async_trait]
pub trait SettingsRepositoryPort: Send + Sync {
    /// Stored settings, or the defaults when nothing is stored
    async fn get(&self) -> Result<AppSettings, StorageError>;
    async fn save(&self, settings: &AppSettings) -> Result<(), StorageError>;
    async fn reset(&self) -> Result<AppSettings, StorageError>;
}
