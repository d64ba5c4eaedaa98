//! Game Log Service - Recording and editing played games

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::{AchievementService, ServiceError, ServiceResult};
use crate::application::dto::ScenarioPromotion;
use crate::application::ports::outbound::GameRepositoryPort;
use crate::domain::entities::{GameRecord, GameRecordUpdate, NewGameRecord};
use crate::domain::services::statistics::newest_first;
use crate::domain::value_objects::GameId;

pub struct GameLogService {
    games: Arc<dyn GameRepositoryPort>,
    achievements: Arc<AchievementService>,
}

impl GameLogService {
    pub fn new(games: Arc<dyn GameRepositoryPort>, achievements: Arc<AchievementService>) -> Self {
        Self {
            games,
            achievements,
        }
    }

    /// All games, newest first
    pub async fn list(&self) -> ServiceResult<Vec<GameRecord>> {
        let games = self.games.list().await?;
        Ok(newest_first(&games).into_iter().cloned().collect())
    }

    pub async fn get(&self, id: GameId) -> ServiceResult<GameRecord> {
        self.games
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn recent(&self, count: usize) -> ServiceResult<Vec<GameRecord>> {
        Ok(self.games.recent(count).await?)
    }

    #[instrument(skip(self, game), fields(villain = %game.villain.name))]
    pub async fn add(&self, game: NewGameRecord) -> ServiceResult<GameRecord> {
        game.validate().map_err(ServiceError::Validation)?;

        let record = self.games.create(game).await?;
        info!(game_id = %record.id, "Logged game");

        self.refresh_achievements().await;
        Ok(record)
    }

    #[instrument(skip(self, update), fields(game_id = %id))]
    pub async fn update(&self, id: GameId, update: GameRecordUpdate) -> ServiceResult<GameRecord> {
        update.validate().map_err(ServiceError::Validation)?;

        let record = self
            .games
            .update(id, update)
            .await?
            .ok_or_else(|| not_found(id))?;
        debug!("Updated game");

        self.refresh_achievements().await;
        Ok(record)
    }

    #[instrument(skip(self), fields(game_id = %id))]
    pub async fn delete(&self, id: GameId) -> ServiceResult<()> {
        if !self.games.delete(id).await? {
            return Err(not_found(id));
        }
        info!("Deleted game");
        Ok(())
    }

    /// Log a generated scenario as a game
    pub async fn promote(&self, promotion: ScenarioPromotion) -> ServiceResult<GameRecord> {
        self.add(promotion.into_new_game(Utc::now())).await
    }

    /// Achievement tracking never fails the game write that triggered it
    async fn refresh_achievements(&self) {
        if let Err(e) = self.achievements.check().await {
            warn!(error = %e, "Failed to re-evaluate achievements");
        }
    }
}

fn not_found(id: GameId) -> ServiceError {
    ServiceError::NotFound(format!("Game {}", id))
}
