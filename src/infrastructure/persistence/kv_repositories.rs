//! Typed repositories over the key-value store
//!
//! Each repository owns one store and keeps its values as JSON. Collection
//! items are keyed by product id, games by game id, achievements by
//! achievement id; settings live under a single fixed key.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::ports::outbound::{
    AchievementRepositoryPort, CollectionRepositoryPort, GameRepositoryPort, KeyValueStorePort,
    SettingsRepositoryPort, StorageError, StoreName,
};
use crate::domain::entities::{
    Achievement, AchievementUpdate, CollectionItem, GameRecord, GameRecordUpdate, NewGameRecord,
};
use crate::domain::services::statistics::newest_first;
use crate::domain::value_objects::{AchievementId, AppSettings, GameId, ProductId};

const SETTINGS_KEY: &str = "settings";

async fn get_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStorePort,
    store: StoreName,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match kv.get(store, key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::read(store, e)),
        None => Ok(None),
    }
}

async fn set_json<T: Serialize + Sync>(
    kv: &dyn KeyValueStorePort,
    store: StoreName,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::write(store, e))?;
    kv.set(store, key, raw).await
}

async fn all_json<T: DeserializeOwned>(
    kv: &dyn KeyValueStorePort,
    store: StoreName,
) -> Result<Vec<T>, StorageError> {
    kv.values(store)
        .await?
        .iter()
        .map(|raw| serde_json::from_str(raw).map_err(|e| StorageError::read(store, e)))
        .collect()
}

// =============================================================================
// Collection
// =============================================================================

pub struct KvCollectionRepository {
    kv: Arc<dyn KeyValueStorePort>,
}

impl KvCollectionRepository {
    const STORE: StoreName = StoreName::Collection;

    pub fn new(kv: Arc<dyn KeyValueStorePort>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl CollectionRepositoryPort for KvCollectionRepository {
    async fn list(&self) -> Result<Vec<CollectionItem>, StorageError> {
        all_json(self.kv.as_ref(), Self::STORE).await
    }

    async fn owned_ids(&self) -> Result<Vec<ProductId>, StorageError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|item| item.owned)
            .map(|item| item.product_id)
            .collect())
    }

    async fn add(&self, product_id: &ProductId) -> Result<(), StorageError> {
        let item = CollectionItem::owned(product_id.clone());
        set_json(self.kv.as_ref(), Self::STORE, product_id.as_str(), &item).await
    }

    async fn remove(&self, product_id: &ProductId) -> Result<(), StorageError> {
        self.kv.remove(Self::STORE, product_id.as_str()).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.kv.clear(Self::STORE).await
    }

    async fn save_all(&self, items: &[CollectionItem]) -> Result<(), StorageError> {
        for item in items {
            set_json(self.kv.as_ref(), Self::STORE, item.product_id.as_str(), item).await?;
        }
        Ok(())
    }
}

// =============================================================================
// Games
// =============================================================================

pub struct KvGameRepository {
    kv: Arc<dyn KeyValueStorePort>,
}

impl KvGameRepository {
    const STORE: StoreName = StoreName::Games;

    pub fn new(kv: Arc<dyn KeyValueStorePort>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl GameRepositoryPort for KvGameRepository {
    async fn list(&self) -> Result<Vec<GameRecord>, StorageError> {
        all_json(self.kv.as_ref(), Self::STORE).await
    }

    async fn get(&self, id: GameId) -> Result<Option<GameRecord>, StorageError> {
        get_json(self.kv.as_ref(), Self::STORE, &id.to_string()).await
    }

    async fn create(&self, game: NewGameRecord) -> Result<GameRecord, StorageError> {
        let record = game.into_record(GameId::new());
        set_json(self.kv.as_ref(), Self::STORE, &record.id.to_string(), &record).await?;
        Ok(record)
    }

    async fn update(
        &self,
        id: GameId,
        update: GameRecordUpdate,
    ) -> Result<Option<GameRecord>, StorageError> {
        let Some(mut record) = self.get(id).await? else {
            return Ok(None);
        };
        record.apply(update);
        set_json(self.kv.as_ref(), Self::STORE, &id.to_string(), &record).await?;
        Ok(Some(record))
    }

    async fn delete(&self, id: GameId) -> Result<bool, StorageError> {
        let key = id.to_string();
        if self.kv.get(Self::STORE, &key).await?.is_none() {
            return Ok(false);
        }
        self.kv.remove(Self::STORE, &key).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.kv.clear(Self::STORE).await
    }

    async fn save_all(&self, games: &[GameRecord]) -> Result<(), StorageError> {
        for game in games {
            set_json(self.kv.as_ref(), Self::STORE, &game.id.to_string(), game).await?;
        }
        Ok(())
    }

    async fn recent(&self, count: usize) -> Result<Vec<GameRecord>, StorageError> {
        let games = self.list().await?;
        Ok(newest_first(&games)
            .into_iter()
            .take(count)
            .cloned()
            .collect())
    }
}

// =============================================================================
// Achievements
// =============================================================================

pub struct KvAchievementRepository {
    kv: Arc<dyn KeyValueStorePort>,
}

impl KvAchievementRepository {
    const STORE: StoreName = StoreName::Achievements;

    pub fn new(kv: Arc<dyn KeyValueStorePort>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl AchievementRepositoryPort for KvAchievementRepository {
    async fn list(&self) -> Result<Vec<Achievement>, StorageError> {
        all_json(self.kv.as_ref(), Self::STORE).await
    }

    async fn get(&self, id: &AchievementId) -> Result<Option<Achievement>, StorageError> {
        get_json(self.kv.as_ref(), Self::STORE, id.as_str()).await
    }

    async fn add(&self, achievement: &Achievement) -> Result<(), StorageError> {
        set_json(self.kv.as_ref(), Self::STORE, achievement.id.as_str(), achievement).await
    }

    async fn update(
        &self,
        id: &AchievementId,
        update: AchievementUpdate,
    ) -> Result<Option<Achievement>, StorageError> {
        let Some(mut achievement) = self.get(id).await? else {
            return Ok(None);
        };
        achievement.apply(update);
        self.add(&achievement).await?;
        Ok(Some(achievement))
    }

    async fn delete(&self, id: &AchievementId) -> Result<bool, StorageError> {
        if self.kv.get(Self::STORE, id.as_str()).await?.is_none() {
            return Ok(false);
        }
        self.kv.remove(Self::STORE, id.as_str()).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.kv.clear(Self::STORE).await
    }

    async fn save_all(&self, achievements: &[Achievement]) -> Result<(), StorageError> {
        for achievement in achievements {
            self.add(achievement).await?;
        }
        Ok(())
    }
}

// =============================================================================
// Settings
// =============================================================================

pub struct KvSettingsRepository {
    kv: Arc<dyn KeyValueStorePort>,
}

impl KvSettingsRepository {
    const STORE: StoreName = StoreName::Settings;

    pub fn new(kv: Arc<dyn KeyValueStorePort>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl SettingsRepositoryPort for KvSettingsRepository {
    async fn get(&self) -> Result<AppSettings, StorageError> {
        Ok(get_json(self.kv.as_ref(), Self::STORE, SETTINGS_KEY)
            .await?
            .unwrap_or_default())
    }

    async fn save(&self, settings: &AppSettings) -> Result<(), StorageError> {
        set_json(self.kv.as_ref(), Self::STORE, SETTINGS_KEY, settings).await
    }

    async fn reset(&self) -> Result<AppSettings, StorageError> {
        let settings = AppSettings::default();
        self.save(&settings).await?;
        Ok(settings)
    }
}
