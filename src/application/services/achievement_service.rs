//! Achievement Service - Stored achievements and their automatic tracking

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::{ServiceError, ServiceResult};
use crate::application::ports::outbound::{AchievementRepositoryPort, GameRepositoryPort};
use crate::domain::entities::{default_achievements, Achievement, AchievementUpdate};
use crate::domain::services::achievement_tracker;
use crate::domain::value_objects::AchievementId;

pub struct AchievementService {
    achievements: Arc<dyn AchievementRepositoryPort>,
    games: Arc<dyn GameRepositoryPort>,
}

impl AchievementService {
    pub fn new(
        achievements: Arc<dyn AchievementRepositoryPort>,
        games: Arc<dyn GameRepositoryPort>,
    ) -> Self {
        Self {
            achievements,
            games,
        }
    }

    /// All achievements; the defaults are stored on first access
    pub async fn list(&self) -> ServiceResult<Vec<Achievement>> {
        let stored = self.achievements.list().await?;
        if !stored.is_empty() {
            return Ok(stored);
        }

        let defaults = default_achievements();
        self.achievements.save_all(&defaults).await?;
        debug!(count = defaults.len(), "Seeded default achievements");
        Ok(defaults)
    }

    #[instrument(skip(self, update), fields(achievement_id = %id))]
    pub async fn update(
        &self,
        id: &AchievementId,
        update: AchievementUpdate,
    ) -> ServiceResult<Achievement> {
        self.achievements
            .update(id, update)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Achievement {}", id)))
    }

    /// Recompute auto-tracked progress from the game log.
    ///
    /// Returns the ids of achievements completed by this check.
    #[instrument(skip(self))]
    pub async fn check(&self) -> ServiceResult<Vec<AchievementId>> {
        let mut achievements = self.list().await?;
        let games = self.games.list().await?;

        let completed = achievement_tracker::track(&mut achievements, &games, Utc::now());
        self.achievements.save_all(&achievements).await?;

        for id in &completed {
            info!(achievement_id = %id, "Achievement completed");
        }
        Ok(completed)
    }
}
