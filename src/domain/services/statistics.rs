//! Statistics - Aggregates computed from the game log
//!
//! In-progress games never count towards totals, rates or streaks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{GameRecord, GameResult};
use crate::domain::value_objects::HeroId;

/// Heroes need this many finished games to be ranked
pub const MIN_HERO_GAMES: usize = 3;
pub const TOP_HEROES_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameStatistics {
    pub total_games: usize,
    pub total_victories: usize,
    pub total_defeats: usize,
    /// Percentage in `[0, 100]`
    pub win_rate: f64,
    /// Length of the run of identical results ending at the newest finished game
    pub current_streak: usize,
    pub is_win_streak: bool,
    pub total_nemesis_encounters: usize,
    pub last_played: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroStats {
    pub hero_id: HeroId,
    pub hero_name: String,
    pub games_played: usize,
    pub victories: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VillainStats {
    pub villain_name: String,
    pub times_faced: usize,
    pub victories: usize,
    pub win_rate: f64,
}

/// Games ordered newest first; ties keep their original order
pub fn newest_first(games: &[GameRecord]) -> Vec<&GameRecord> {
    let mut sorted: Vec<&GameRecord> = games.iter().collect();
    sorted.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    sorted
}

pub fn game_statistics(games: &[GameRecord]) -> GameStatistics {
    let finished: Vec<&GameRecord> = newest_first(games)
        .into_iter()
        .filter(|g| g.result.is_finished())
        .collect();

    let total_games = finished.len();
    let total_victories = finished.iter().filter(|g| g.is_victory()).count();

    let (current_streak, is_win_streak) = match finished.first() {
        Some(newest) => (
            finished
                .iter()
                .take_while(|g| g.result == newest.result)
                .count(),
            newest.result == GameResult::Victory,
        ),
        None => (0, false),
    };

    GameStatistics {
        total_games,
        total_victories,
        total_defeats: total_games - total_victories,
        win_rate: percentage(total_victories, total_games),
        current_streak,
        is_win_streak,
        total_nemesis_encounters: games.iter().map(GameRecord::nemesis_encounters).sum(),
        last_played: games.iter().map(|g| g.date_time).max(),
    }
}

/// Best heroes by win rate among those with at least [`MIN_HERO_GAMES`]
/// finished games
pub fn top_heroes(games: &[GameRecord], limit: usize) -> Vec<HeroStats> {
    let mut order: Vec<HeroId> = Vec::new();
    let mut tally: HashMap<HeroId, HeroStats> = HashMap::new();

    for game in games {
        for player in &game.players {
            let stats = tally.entry(player.hero.id.clone()).or_insert_with(|| {
                order.push(player.hero.id.clone());
                HeroStats {
                    hero_id: player.hero.id.clone(),
                    hero_name: player.hero.display_name(),
                    games_played: 0,
                    victories: 0,
                    win_rate: 0.0,
                }
            });
            if game.result.is_finished() {
                stats.games_played += 1;
            }
            if game.is_victory() {
                stats.victories += 1;
            }
        }
    }

    let mut ranked: Vec<HeroStats> = order
        .into_iter()
        .filter_map(|id| tally.remove(&id))
        .filter(|stats| stats.games_played >= MIN_HERO_GAMES)
        .map(|mut stats| {
            stats.win_rate = percentage(stats.victories, stats.games_played);
            stats
        })
        .collect();
    ranked.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
    ranked.truncate(limit);
    ranked
}

/// Villain with the most finished games; the first one logged wins ties
pub fn most_faced_villain(games: &[GameRecord]) -> Option<VillainStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();

    for game in games {
        let name = game.villain.name.as_str();
        let (faced, won) = tally.entry(name).or_insert_with(|| {
            order.push(name);
            (0, 0)
        });
        if game.result.is_finished() {
            *faced += 1;
        }
        if game.is_victory() {
            *won += 1;
        }
    }

    let mut best: Option<VillainStats> = None;
    for name in order {
        let (faced, won) = tally[name];
        if faced > best.as_ref().map_or(0, |b| b.times_faced) {
            best = Some(VillainStats {
                villain_name: name.to_string(),
                times_faced: faced,
                victories: won,
                win_rate: percentage(won, faced),
            });
        }
    }
    best
}

/// Longest run of consecutive victories across finished games
pub fn longest_win_streak(games: &[GameRecord]) -> usize {
    let mut chronological = newest_first(games);
    chronological.reverse();

    let mut best = 0;
    let mut run = 0;
    for game in chronological.into_iter().filter(|g| g.result.is_finished()) {
        if game.is_victory() {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Duration, TimeZone, Utc};

    use crate::domain::entities::{GameRecord, GameResult, Hero, Player, Villain};
    use crate::domain::value_objects::{Difficulty, GameId, HeroId};

    /// A game `minutes` after a fixed epoch
    pub fn game(minutes: i64, villain: &str, heroes: &[&str], result: GameResult) -> GameRecord {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        GameRecord {
            id: GameId::new(),
            date_time: epoch + Duration::minutes(minutes),
            players: heroes
                .iter()
                .map(|h| Player {
                    player_name: None,
                    hero: Hero {
                        id: HeroId::new(*h),
                        name: h.to_string(),
                        alter_ego: format!("{} alter ego", h),
                        nemesis: format!("{} nemesis", h),
                        prebuilt_aspects: None,
                    },
                    aspects: vec![],
                    nemesis_encountered: false,
                })
                .collect(),
            villain: Villain::new(villain, vec![villain.to_string()]),
            difficulty: Difficulty::default(),
            required_sets: vec![villain.to_string()],
            additional_sets: vec![],
            result,
            notes: None,
        }
    }
}
