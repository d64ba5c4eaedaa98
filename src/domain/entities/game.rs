//! Game record entity - One logged play session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Hero, Villain};
use crate::domain::value_objects::{Aspect, Difficulty, GameId};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Victory,
    Defeat,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl GameResult {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    pub hero: Hero,
    pub aspects: Vec<Aspect>,
    #[serde(default)]
    pub nemesis_encountered: bool,
}

/// A stored game. Identity is assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub date_time: DateTime<Utc>,
    pub players: Vec<Player>,
    pub villain: Villain,
    pub difficulty: Difficulty,
    pub required_sets: Vec<String>,
    #[serde(default)]
    pub additional_sets: Vec<String>,
    pub result: GameResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A game record before it has been stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGameRecord {
    pub date_time: DateTime<Utc>,
    pub players: Vec<Player>,
    pub villain: Villain,
    pub difficulty: Difficulty,
    pub required_sets: Vec<String>,
    #[serde(default)]
    pub additional_sets: Vec<String>,
    pub result: GameResult,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewGameRecord {
    pub fn validate(&self) -> Result<(), String> {
        validate_players(&self.players)
    }

    pub fn into_record(self, id: GameId) -> GameRecord {
        GameRecord {
            id,
            date_time: self.date_time,
            players: self.players,
            villain: self.villain,
            difficulty: self.difficulty,
            required_sets: self.required_sets,
            additional_sets: self.additional_sets,
            result: self.result,
            notes: self.notes,
        }
    }
}

/// Partial update of a stored game; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecordUpdate {
    pub date_time: Option<DateTime<Utc>>,
    pub players: Option<Vec<Player>>,
    pub villain: Option<Villain>,
    pub difficulty: Option<Difficulty>,
    pub required_sets: Option<Vec<String>>,
    pub additional_sets: Option<Vec<String>>,
    pub result: Option<GameResult>,
    pub notes: Option<String>,
}

impl GameRecordUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match &self.players {
            Some(players) => validate_players(players),
            None => Ok(()),
        }
    }
}

impl GameRecord {
    pub fn apply(&mut self, update: GameRecordUpdate) {
        if let Some(date_time) = update.date_time {
            self.date_time = date_time;
        }
        if let Some(players) = update.players {
            self.players = players;
        }
        if let Some(villain) = update.villain {
            self.villain = villain;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(required_sets) = update.required_sets {
            self.required_sets = required_sets;
        }
        if let Some(additional_sets) = update.additional_sets {
            self.additional_sets = additional_sets;
        }
        if let Some(result) = update.result {
            self.result = result;
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
    }

    pub fn is_victory(&self) -> bool {
        self.result == GameResult::Victory
    }

    pub fn nemesis_encounters(&self) -> usize {
        self.players.iter().filter(|p| p.nemesis_encountered).count()
    }
}

fn validate_players(players: &[Player]) -> Result<(), String> {
    if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
        return Err(format!(
            "A game needs between {} and {} players, got {}",
            MIN_PLAYERS,
            MAX_PLAYERS,
            players.len()
        ));
    }
    Ok(())
}
