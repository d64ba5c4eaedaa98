//! Data Transfer Service - Export, import and wipe of all user data

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use super::{ServiceError, ServiceResult, SettingsService};
use crate::application::dto::{ExportData, ImportMode, ImportRequest, EXPORT_VERSION};
use crate::application::ports::outbound::{
    AchievementRepositoryPort, CollectionRepositoryPort, GameRepositoryPort,
};
use crate::domain::aggregates::Catalog;
use crate::domain::entities::{MAX_PLAYERS, MIN_PLAYERS};

pub struct DataTransferService {
    catalog: Arc<Catalog>,
    collection: Arc<dyn CollectionRepositoryPort>,
    games: Arc<dyn GameRepositoryPort>,
    achievements: Arc<dyn AchievementRepositoryPort>,
    settings: Arc<SettingsService>,
}

impl DataTransferService {
    pub fn new(
        catalog: Arc<Catalog>,
        collection: Arc<dyn CollectionRepositoryPort>,
        games: Arc<dyn GameRepositoryPort>,
        achievements: Arc<dyn AchievementRepositoryPort>,
        settings: Arc<SettingsService>,
    ) -> Self {
        Self {
            catalog,
            collection,
            games,
            achievements,
            settings,
        }
    }

    #[instrument(skip(self))]
    pub async fn export(&self) -> ServiceResult<ExportData> {
        Ok(ExportData {
            version: EXPORT_VERSION.to_string(),
            export_date: Utc::now(),
            collection: self.collection.list().await?,
            games: self.games.list().await?,
            achievements: self.achievements.list().await?,
            settings: self.settings.get().await,
        })
    }

    #[instrument(skip(self, request), fields(mode = ?request.mode))]
    pub async fn import(&self, request: ImportRequest) -> ServiceResult<()> {
        let data = request.data;
        self.validate(&data)?;

        if request.mode == ImportMode::Replace {
            self.clear_all().await?;
        }

        self.collection.save_all(&data.collection).await?;
        self.games.save_all(&data.games).await?;
        self.achievements.save_all(&data.achievements).await?;
        self.settings.save(data.settings).await?;

        info!(
            products = data.collection.len(),
            games = data.games.len(),
            achievements = data.achievements.len(),
            "Imported data"
        );
        Ok(())
    }

    /// Remove the collection, games and achievements. Settings are kept.
    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> ServiceResult<()> {
        self.collection.clear().await?;
        self.games.clear().await?;
        self.achievements.clear().await?;
        info!("Cleared all user data");
        Ok(())
    }

    fn validate(&self, data: &ExportData) -> ServiceResult<()> {
        if data.version.trim().is_empty() {
            return Err(invalid("missing version"));
        }

        if let Some(item) = data
            .collection
            .iter()
            .find(|item| !self.catalog.contains(&item.product_id))
        {
            return Err(invalid(format!("unknown product {}", item.product_id)));
        }

        let mut game_ids = HashSet::new();
        for game in &data.games {
            if !game_ids.insert(game.id) {
                return Err(invalid(format!("duplicate game {}", game.id)));
            }
            if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&game.players.len()) {
                return Err(invalid(format!(
                    "game {} has {} players",
                    game.id,
                    game.players.len()
                )));
            }
        }

        let mut achievement_ids = HashSet::new();
        for achievement in &data.achievements {
            if !achievement_ids.insert(&achievement.id) {
                return Err(invalid(format!("duplicate achievement {}", achievement.id)));
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl std::fmt::Display) -> ServiceError {
    ServiceError::Validation(format!("Invalid import data: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{finished_game, TestContext};
    use crate::domain::entities::{CollectionItem, GameResult};
    use crate::domain::value_objects::{ProductId, SettingsUpdate, Theme};

    #[tokio::test]
    async fn test_export_shape() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        ctx.games
            .create(finished_game("Rhino", GameResult::Victory))
            .await
            .unwrap();

        let data = ctx.data_transfer_service().export().await.unwrap();
        assert_eq!(data.version, "0.1");
        assert_eq!(data.collection.len(), 1);
        assert_eq!(data.games.len(), 1);

        let json = serde_json::to_value(&data).unwrap();
        for field in ["version", "export_date", "collection", "games", "achievements", "settings"] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }

    #[tokio::test]
    async fn test_replace_import_round_trip() {
        let source = TestContext::new();
        source.own(&["core-set-2019", "cycle1-thor"]).await;
        source
            .games
            .create(finished_game("Klaw", GameResult::Defeat))
            .await
            .unwrap();
        source
            .settings_service()
            .update(SettingsUpdate {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .await
            .unwrap();
        let exported = source.data_transfer_service().export().await.unwrap();

        let target = TestContext::new();
        target.own(&["cycle2-wasp"]).await;
        target
            .data_transfer_service()
            .import(ImportRequest {
                mode: ImportMode::Replace,
                data: exported.clone(),
            })
            .await
            .unwrap();

        let reexported = target.data_transfer_service().export().await.unwrap();
        assert_eq!(reexported.collection, exported.collection);
        assert_eq!(reexported.games, exported.games);
        assert_eq!(reexported.settings.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_merge_import_keeps_existing() {
        let ctx = TestContext::new();
        ctx.own(&["cycle2-wasp"]).await;
        let service = ctx.data_transfer_service();

        let mut data = service.export().await.unwrap();
        data.collection = vec![CollectionItem::owned(ProductId::new("core-set-2019"))];
        service
            .import(ImportRequest {
                mode: ImportMode::Merge,
                data,
            })
            .await
            .unwrap();

        assert_eq!(ctx.collection.owned_ids().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_import_changes_nothing() {
        let ctx = TestContext::new();
        ctx.own(&["cycle2-wasp"]).await;
        let service = ctx.data_transfer_service();

        let mut data = service.export().await.unwrap();
        data.collection = vec![CollectionItem::owned(ProductId::new("bogus"))];
        let result = service
            .import(ImportRequest {
                mode: ImportMode::Replace,
                data,
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert_eq!(
            ctx.collection.owned_ids().await.unwrap(),
            vec![ProductId::new("cycle2-wasp")]
        );
    }

    #[tokio::test]
    async fn test_clear_all_keeps_settings() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        ctx.games
            .create(finished_game("Rhino", GameResult::Victory))
            .await
            .unwrap();
        ctx.settings_service()
            .update(SettingsUpdate {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .await
            .unwrap();

        ctx.data_transfer_service().clear_all().await.unwrap();

        assert!(ctx.collection.list().await.unwrap().is_empty());
        assert!(ctx.games.list().await.unwrap().is_empty());
        assert_eq!(ctx.settings_service().get().await.theme, Theme::Dark);
    }
}
