//! Dashboard Service - Summary statistics for the landing page

use std::sync::Arc;

use tracing::instrument;

use super::ServiceResult;
use crate::application::dto::DashboardSummary;
use crate::application::ports::outbound::{CollectionRepositoryPort, GameRepositoryPort};
use crate::domain::aggregates::Catalog;
use crate::domain::services::statistics::{self, TOP_HEROES_LIMIT};

pub struct DashboardService {
    catalog: Arc<Catalog>,
    collection: Arc<dyn CollectionRepositoryPort>,
    games: Arc<dyn GameRepositoryPort>,
    recent_limit: usize,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<Catalog>,
        collection: Arc<dyn CollectionRepositoryPort>,
        games: Arc<dyn GameRepositoryPort>,
        recent_limit: usize,
    ) -> Self {
        Self {
            catalog,
            collection,
            games,
            recent_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<DashboardSummary> {
        // Oldest first, so ties are broken by the game logged first
        let mut games = self.games.list().await?;
        games.sort_by_key(|g| g.date_time);
        let owned_product_count = self
            .collection
            .owned_ids()
            .await?
            .iter()
            .filter(|id| self.catalog.contains(id))
            .count();

        Ok(DashboardSummary {
            stats: statistics::game_statistics(&games),
            owned_product_count,
            total_product_count: self.catalog.len(),
            recent_games: statistics::newest_first(&games)
                .into_iter()
                .take(self.recent_limit)
                .cloned()
                .collect(),
            top_heroes: statistics::top_heroes(&games, TOP_HEROES_LIMIT),
            most_faced_villain: statistics::most_faced_villain(&games),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{finished_game, TestContext};
    use crate::domain::entities::GameResult;

    #[tokio::test]
    async fn test_empty_dashboard() {
        let ctx = TestContext::new();
        let summary = ctx.dashboard_service().summary().await.unwrap();

        assert_eq!(summary.stats.total_games, 0);
        assert_eq!(summary.stats.win_rate, 0.0);
        assert_eq!(summary.owned_product_count, 0);
        assert_eq!(summary.total_product_count, ctx.catalog.len());
        assert!(summary.recent_games.is_empty());
        assert!(summary.most_faced_villain.is_none());
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let ctx = TestContext::new();
        ctx.own(&["core-set-2019", "cycle1-thor"]).await;
        for (i, (villain, result)) in [
            ("Rhino", GameResult::Victory),
            ("Rhino", GameResult::Defeat),
            ("Klaw", GameResult::Victory),
            ("Klaw", GameResult::Victory),
            ("Klaw", GameResult::InProgress),
            ("Klaw", GameResult::Defeat),
            ("Ultron", GameResult::Victory),
            ("Ultron", GameResult::Defeat),
        ]
        .into_iter()
        .enumerate()
        {
            let mut game = finished_game(villain, result);
            game.date_time = game.date_time + chrono::Duration::minutes(i as i64);
            ctx.games.create(game).await.unwrap();
        }

        let summary = ctx.dashboard_service().summary().await.unwrap();
        assert_eq!(summary.owned_product_count, 2);
        assert_eq!(summary.stats.total_games, 7);
        assert_eq!(summary.stats.total_victories, 4);
        assert_eq!(summary.stats.current_streak, 1);
        assert!(!summary.stats.is_win_streak);
        assert_eq!(summary.recent_games.len(), 5);
        assert_eq!(summary.recent_games[0].villain.name, "Ultron");
        let villain = summary.most_faced_villain.unwrap();
        assert_eq!(villain.villain_name, "Klaw");
        assert_eq!(villain.times_faced, 3);
        assert_eq!(summary.top_heroes.len(), 1);
        assert_eq!(summary.top_heroes[0].games_played, 7);
    }
}
