//! Generator Service - Runs the scenario generator against stored data
//!
//! All storage reads happen before generation starts; the generator itself
//! is synchronous and pure.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::ServiceResult;
use crate::application::ports::outbound::{CollectionRepositoryPort, GameRepositoryPort};
use crate::domain::aggregates::Catalog;
use crate::domain::entities::{GeneratorConfig, RerollKind, Scenario};
use crate::domain::services::{GeneratorModuleRegistry, ScenarioGenerator, SeededRandom};

pub struct GeneratorService {
    catalog: Arc<Catalog>,
    collection: Arc<dyn CollectionRepositoryPort>,
    games: Arc<dyn GameRepositoryPort>,
    modules: GeneratorModuleRegistry,
    last_error: RwLock<Option<String>>,
}

impl GeneratorService {
    pub fn new(
        catalog: Arc<Catalog>,
        collection: Arc<dyn CollectionRepositoryPort>,
        games: Arc<dyn GameRepositoryPort>,
    ) -> Self {
        let modules = GeneratorModuleRegistry::with_defaults(&catalog);
        Self {
            catalog,
            collection,
            games,
            modules,
            last_error: RwLock::new(None),
        }
    }

    #[instrument(skip(self), fields(players = config.player_count))]
    pub async fn try_generate(&self, config: &GeneratorConfig) -> ServiceResult<Scenario> {
        let owned = self.collection.owned_ids().await?;
        let recent = match config.exclusion_lookback() {
            Some(lookback) => self.games.recent(lookback).await?,
            None => Vec::new(),
        };

        let pool = self.catalog.owned_pool(&owned);
        let mut rng = SeededRandom::from_optional_seed(config.seed);
        let scenario =
            ScenarioGenerator::new(&self.modules).generate(config, &pool, &recent, &mut rng)?;

        debug!(villain = %scenario.villain.name, "Generated scenario");
        Ok(scenario)
    }

    /// Generate a scenario and remember the outcome for `last_error`
    pub async fn generate(&self, config: &GeneratorConfig) -> ServiceResult<Scenario> {
        let result = self.try_generate(config).await;
        self.record(result).await
    }

    /// Re-roll part of a previous scenario
    pub async fn reroll(
        &self,
        kind: RerollKind,
        previous: Scenario,
        config: &GeneratorConfig,
    ) -> ServiceResult<Scenario> {
        let result = self
            .try_generate(config)
            .await
            .map(|fresh| previous.reroll(fresh, kind));
        self.record(result).await
    }

    /// Message of the most recent failed generation, cleared on success
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    async fn record(&self, result: ServiceResult<Scenario>) -> ServiceResult<Scenario> {
        match &result {
            Ok(_) => *self.last_error.write().await = None,
            Err(e) => {
                warn!(error = %e, "Scenario generation failed");
                *self.last_error.write().await = Some(e.to_string());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{finished_game, TestContext};
    use crate::application::services::ServiceError;
    use crate::domain::entities::{AdditionalSets, ExcludeRecent, GameResult};
    use crate::domain::services::GeneratorError;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            player_count: 2,
            additional_sets: AdditionalSets::Count(1),
            randomize_heroes: true,
            randomize_aspects: true,
            seed: Some(17),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_collection_records_error() {
        let ctx = TestContext::new();
        let service = ctx.generator_service();

        let result = service.try_generate(&config()).await;
        assert!(matches!(
            result,
            Err(ServiceError::Generation(GeneratorError::NoVillainsAvailable))
        ));

        let err = service.generate(&config()).await.unwrap_err();
        assert!(err.to_string().contains("villains available"));
        assert_eq!(service.last_error().await, Some(err.to_string()));
    }

    #[tokio::test]
    async fn test_failure_is_returned_even_after_later_success() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        let service = ctx.generator_service();
        let invalid = GeneratorConfig {
            player_count: 0,
            ..Default::default()
        };

        let err = service.generate(&invalid).await.unwrap_err();
        assert!(service.generate(&config()).await.is_ok());
        assert!(service.last_error().await.is_none());
        assert!(matches!(
            err,
            ServiceError::Generation(GeneratorError::InvalidConfig(_))
        ));

        let previous = service.try_generate(&config()).await.unwrap();
        let rerolled = service.reroll(RerollKind::Heroes, previous, &invalid).await;
        assert!(rerolled.is_err());
        assert!(service.last_error().await.is_some());
    }

    #[tokio::test]
    async fn test_generate_from_owned_products() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        let service = ctx.generator_service();

        assert!(service.generate(&GeneratorConfig::default()).await.is_ok());
        let scenario = service.generate(&config()).await.unwrap();
        assert!(["Rhino", "Klaw", "Ultron"].contains(&scenario.villain.name.as_str()));
        assert_eq!(scenario.players.unwrap().len(), 2);
        assert!(service.last_error().await.is_none());
    }

    #[tokio::test]
    async fn test_seeded_generation_is_reproducible() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019", "cycle1-thor", "cycle1-black-widow"])
            .await;
        let service = ctx.generator_service();

        let a = service.try_generate(&config()).await.unwrap();
        let b = service.try_generate(&config()).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_recent_games_are_excluded() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        for villain in ["Rhino", "Klaw"] {
            ctx.games
                .create(finished_game(villain, GameResult::Defeat))
                .await
                .unwrap();
        }
        let service = ctx.generator_service();

        for seed in 0..10 {
            let config = GeneratorConfig {
                exclude_recent: Some(ExcludeRecent { lookback: 2 }),
                seed: Some(seed),
                ..Default::default()
            };
            let scenario = service.try_generate(&config).await.unwrap();
            assert_eq!(scenario.villain.name, "Ultron");
        }
    }

    #[tokio::test]
    async fn test_reroll_heroes_keeps_villain() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        let service = ctx.generator_service();

        let previous = service.try_generate(&config()).await.unwrap();
        let config = GeneratorConfig {
            seed: Some(99),
            ..config()
        };
        let rerolled = service
            .reroll(RerollKind::Heroes, previous.clone(), &config)
            .await
            .unwrap();

        assert_eq!(rerolled.villain, previous.villain);
        assert_eq!(rerolled.required_sets, previous.required_sets);
        assert_eq!(rerolled.additional_sets, previous.additional_sets);
        assert_eq!(rerolled.players.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_player_count() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019"]).await;
        let config = GeneratorConfig {
            player_count: 5,
            ..Default::default()
        };

        let result = ctx.generator_service().try_generate(&config).await;
        assert!(matches!(
            result,
            Err(ServiceError::Generation(GeneratorError::InvalidConfig(_)))
        ));
    }
}
