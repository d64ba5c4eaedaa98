use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{instrument, warn};

use crate::application::ports::outbound::{SettingsRepositoryPort, StorageError};
use crate::domain::value_objects::{AppSettings, SettingsUpdate};

pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryPort>,
    cache: RwLock<Option<AppSettings>>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryPort>) -> Self {
        Self {
            repository,
            cache: RwLock::new(None),
        }
    }

    /// Get current settings (cached)
    pub async fn get(&self) -> AppSettings {
        let cache = self.cache.read().await;
        if let Some(settings) = &*cache {
            return settings.clone();
        }
        drop(cache);

        // Load from storage
        match self.repository.get().await {
            Ok(settings) => {
                *self.cache.write().await = Some(settings.clone());
                settings
            }
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                AppSettings::default()
            }
        }
    }

    /// Replace settings wholesale
    #[instrument(skip(self))]
    pub async fn save(&self, settings: AppSettings) -> Result<(), StorageError> {
        self.repository.save(&settings).await?;
        *self.cache.write().await = Some(settings);
        Ok(())
    }

    /// Merge a partial update into the current settings
    #[instrument(skip(self))]
    pub async fn update(&self, update: SettingsUpdate) -> Result<AppSettings, StorageError> {
        let settings = self.get().await.apply(update);
        self.save(settings.clone()).await?;
        Ok(settings)
    }

    /// Reset to defaults
    pub async fn reset(&self) -> Result<AppSettings, StorageError> {
        let settings = self.repository.reset().await?;
        *self.cache.write().await = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Difficulty, ExpertSet, StandardSet, Theme};
    use crate::infrastructure::persistence::{InMemoryKeyValueStore, KvSettingsRepository};

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(KvSettingsRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        ))))
    }

    #[tokio::test]
    async fn test_defaults() {
        let settings = service().get().await;
        assert_eq!(settings.default_difficulty.standard_set, StandardSet::Standard);
        assert_eq!(settings.default_difficulty.expert_set, ExpertSet::None);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_partial_update_then_reset() {
        let service = service();
        let updated = service
            .update(SettingsUpdate {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.theme, Theme::Dark);
        assert_eq!(updated.default_difficulty, Difficulty::default());
        assert_eq!(service.get().await.theme, Theme::Dark);

        let reset = service.reset().await.unwrap();
        assert_eq!(reset, AppSettings::default());
        assert_eq!(service.get().await, AppSettings::default());
    }
}
