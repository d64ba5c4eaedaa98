use serde::Serialize;

use crate::domain::entities::GameRecord;
use crate::domain::services::{GameStatistics, HeroStats, VillainStats};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub stats: GameStatistics,
    pub owned_product_count: usize,
    pub total_product_count: usize,
    /// Newest first
    pub recent_games: Vec<GameRecord>,
    pub top_heroes: Vec<HeroStats>,
    pub most_faced_villain: Option<VillainStats>,
}
