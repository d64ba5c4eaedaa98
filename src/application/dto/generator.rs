use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    GameResult, GeneratorConfig, NewGameRecord, Player, RerollKind, Scenario,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RerollRequest {
    pub kind: RerollKind,
    pub previous: Scenario,
    pub config: GeneratorConfig,
}

/// A generated scenario the user decided to play, with the details that
/// only exist once the game is under way
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioPromotion {
    pub scenario: Scenario,
    /// Defaults to the time of promotion
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
    /// Replaces the scenario's players. Required when heroes were not randomized.
    #[serde(default)]
    pub players: Option<Vec<Player>>,
    #[serde(default = "in_progress")]
    pub result: GameResult,
    #[serde(default)]
    pub notes: Option<String>,
}

fn in_progress() -> GameResult {
    GameResult::InProgress
}

impl ScenarioPromotion {
    pub fn into_new_game(self, now: DateTime<Utc>) -> NewGameRecord {
        let scenario = self.scenario;
        let players = self.players.unwrap_or_else(|| {
            scenario
                .players
                .unwrap_or_default()
                .into_iter()
                .map(|p| Player {
                    player_name: None,
                    hero: p.hero,
                    aspects: p.aspects,
                    nemesis_encountered: false,
                })
                .collect()
        });

        NewGameRecord {
            date_time: self.date_time.unwrap_or(now),
            players,
            villain: scenario.villain,
            difficulty: scenario.difficulty,
            required_sets: scenario.required_sets,
            additional_sets: scenario.additional_sets,
            result: self.result,
            notes: self.notes,
        }
    }
}
