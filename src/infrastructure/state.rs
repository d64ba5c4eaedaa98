//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{
    AchievementRepositoryPort, CollectionRepositoryPort, GameRepositoryPort,
};
use crate::application::services::{
    AchievementService, CollectionService, DashboardService, DataTransferService, GameLogService,
    GeneratorService, SettingsService,
};
use crate::domain::aggregates::Catalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::KvRepository;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
    // Application services
    pub collection_service: CollectionService,
    pub game_log_service: GameLogService,
    pub generator_service: GeneratorService,
    pub dashboard_service: DashboardService,
    pub achievement_service: Arc<AchievementService>,
    pub settings_service: Arc<SettingsService>,
    pub data_transfer_service: DataTransferService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let catalog = Catalog::bundled().context("Bundled catalog is invalid")?;
        tracing::info!("Loaded catalog with {} products", catalog.len());

        let repository = KvRepository::open(&config.storage_backend, &config.database_url).await?;

        Ok(Self::with_repository(config, Arc::new(catalog), repository))
    }

    /// Wire every service against one repository
    pub fn with_repository(
        config: AppConfig,
        catalog: Arc<Catalog>,
        repository: KvRepository,
    ) -> Self {
        let collection: Arc<dyn CollectionRepositoryPort> = Arc::new(repository.collection());
        let games: Arc<dyn GameRepositoryPort> = Arc::new(repository.games());
        let achievements: Arc<dyn AchievementRepositoryPort> = Arc::new(repository.achievements());

        let achievement_service =
            Arc::new(AchievementService::new(achievements.clone(), games.clone()));
        let settings_service = Arc::new(SettingsService::new(Arc::new(repository.settings())));

        Self {
            collection_service: CollectionService::new(catalog.clone(), collection.clone()),
            game_log_service: GameLogService::new(games.clone(), achievement_service.clone()),
            generator_service: GeneratorService::new(
                catalog.clone(),
                collection.clone(),
                games.clone(),
            ),
            dashboard_service: DashboardService::new(
                catalog.clone(),
                collection.clone(),
                games.clone(),
                config.recent_games_limit,
            ),
            data_transfer_service: DataTransferService::new(
                catalog.clone(),
                collection,
                games,
                achievements,
                settings_service.clone(),
            ),
            achievement_service,
            settings_service,
            catalog,
            config,
        }
    }
}
