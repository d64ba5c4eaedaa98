//! Scenario entities - Generator input and output
//!
//! A [`Scenario`] is transient: it only becomes a game record if the user
//! chooses to log it.

use serde::{Deserialize, Serialize};

use super::{Hero, Villain, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::value_objects::{Aspect, Difficulty};

/// How many additional modular sets to add on top of the required ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "count", rename_all = "snake_case")]
pub enum AdditionalSets {
    /// A literal count, clamped to the available pool
    Count(usize),
    /// As many as the chosen villain recommends
    MatchRecommended,
}

impl Default for AdditionalSets {
    fn default() -> Self {
        AdditionalSets::Count(0)
    }
}

/// Recency filter applied to the villain and hero pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeRecent {
    /// Number of most recent games to look back over
    pub lookback: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub player_count: usize,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub additional_sets: AdditionalSets,
    #[serde(default)]
    pub randomize_heroes: bool,
    /// Only honoured together with `randomize_heroes`
    #[serde(default)]
    pub randomize_aspects: bool,
    #[serde(default)]
    pub exclude_recent: Option<ExcludeRecent>,
    /// Fixed seed for reproducible generation
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            player_count: 1,
            difficulty: Difficulty::default(),
            additional_sets: AdditionalSets::default(),
            randomize_heroes: false,
            randomize_aspects: false,
            exclude_recent: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.player_count < MIN_PLAYERS || self.player_count > MAX_PLAYERS {
            return Err(format!(
                "Player count must be between {} and {}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            ));
        }
        Ok(())
    }

    /// Lookback count of the recency filter, when it is active
    pub fn exclusion_lookback(&self) -> Option<usize> {
        self.exclude_recent
            .map(|exclude| exclude.lookback)
            .filter(|lookback| *lookback > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlayer {
    pub hero: Hero,
    /// Empty when the hero has no prebuilt aspects and randomization is off
    pub aspects: Vec<Aspect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub villain: Villain,
    pub difficulty: Difficulty,
    pub required_sets: Vec<String>,
    pub additional_sets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<ScenarioPlayer>>,
}

/// Which part of a previously generated scenario to re-roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RerollKind {
    All,
    Villain,
    Heroes,
    Sets,
}

impl Scenario {
    /// Graft fields of a freshly generated scenario onto this one.
    ///
    /// The result never lists a set as both required and additional.
    pub fn reroll(self, fresh: Scenario, kind: RerollKind) -> Scenario {
        match kind {
            RerollKind::All => fresh,
            RerollKind::Villain => {
                let additional_sets = if self
                    .additional_sets
                    .iter()
                    .all(|set| !fresh.required_sets.contains(set))
                {
                    self.additional_sets
                } else {
                    fresh.additional_sets
                };
                Scenario {
                    additional_sets,
                    players: self.players.or(fresh.players),
                    ..fresh
                }
            }
            RerollKind::Heroes => Scenario {
                players: fresh.players,
                ..self
            },
            RerollKind::Sets => {
                let additional_sets = fresh
                    .additional_sets
                    .into_iter()
                    .filter(|set| !self.required_sets.contains(set))
                    .collect();
                Scenario {
                    additional_sets,
                    ..self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::HeroId;

    fn scenario(villain: &str, additional: &[&str], hero: &str) -> Scenario {
        Scenario {
            villain: Villain::new(villain, vec![villain.to_string()]),
            difficulty: Difficulty::default(),
            required_sets: vec![villain.to_string()],
            additional_sets: additional.iter().map(|s| s.to_string()).collect(),
            players: Some(vec![ScenarioPlayer {
                hero: Hero {
                    id: HeroId::new(hero),
                    name: hero.to_string(),
                    alter_ego: String::new(),
                    nemesis: String::new(),
                    prebuilt_aspects: None,
                },
                aspects: vec![],
            }]),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        config.player_count = 0;
        assert!(config.validate().is_err());
        config.player_count = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_exclusion_lookback_ignores_zero() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.exclusion_lookback(), None);
        config.exclude_recent = Some(ExcludeRecent { lookback: 0 });
        assert_eq!(config.exclusion_lookback(), None);
        config.exclude_recent = Some(ExcludeRecent { lookback: 3 });
        assert_eq!(config.exclusion_lookback(), Some(3));
    }

    #[test]
    fn test_reroll_villain_keeps_heroes_and_sets() {
        let previous = scenario("Rhino", &["Bomb Scare"], "thor");
        let fresh = scenario("Klaw", &["Under Attack"], "hulk");

        let merged = previous.reroll(fresh, RerollKind::Villain);
        assert_eq!(merged.villain.name, "Klaw");
        assert_eq!(merged.additional_sets, vec!["Bomb Scare".to_string()]);
        assert_eq!(merged.players.unwrap()[0].hero.id, HeroId::new("thor"));
    }

    #[test]
    fn test_reroll_villain_drops_sets_that_became_required() {
        let previous = scenario("Rhino", &["Klaw"], "thor");
        let fresh = scenario("Klaw", &["Under Attack"], "hulk");

        let merged = previous.reroll(fresh, RerollKind::Villain);
        assert_eq!(merged.additional_sets, vec!["Under Attack".to_string()]);
    }

    #[test]
    fn test_reroll_heroes_and_sets_keep_villain() {
        let previous = scenario("Rhino", &["Bomb Scare"], "thor");

        let heroes = previous
            .clone()
            .reroll(scenario("Klaw", &["Under Attack"], "hulk"), RerollKind::Heroes);
        assert_eq!(heroes.villain.name, "Rhino");
        assert_eq!(heroes.additional_sets, vec!["Bomb Scare".to_string()]);
        assert_eq!(heroes.players.unwrap()[0].hero.id, HeroId::new("hulk"));

        let sets = previous.reroll(
            scenario("Klaw", &["Under Attack", "Rhino"], "hulk"),
            RerollKind::Sets,
        );
        assert_eq!(sets.villain.name, "Rhino");
        assert_eq!(sets.additional_sets, vec!["Under Attack".to_string()]);
        assert_eq!(sets.players.unwrap()[0].hero.id, HeroId::new("thor"));
    }
}
