//! Scenario Generator - Builds a playable scenario from owned content
//!
//! The generator is pure: it works on an [`OwnedPool`] and a slice of recent
//! games that the caller has already fetched, plus an injected
//! `RngCore`. It never reads or writes storage, and holds no state between
//! calls.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use super::generator_modules::GeneratorModuleRegistry;
use crate::domain::aggregates::OwnedPool;
use crate::domain::entities::{
    AdditionalSets, GameRecord, GeneratorConfig, Hero, Scenario, ScenarioPlayer, Villain,
};
use crate::domain::value_objects::{Aspect, Difficulty, HeroId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("No villains available. Please add some products to your collection.")]
    NoVillainsAvailable,
    #[error("Not enough heroes available. Need {needed}, have {available}")]
    NotEnoughHeroes { needed: usize, available: usize },
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

pub struct ScenarioGenerator<'a> {
    modules: &'a GeneratorModuleRegistry,
}

impl<'a> ScenarioGenerator<'a> {
    pub fn new(modules: &'a GeneratorModuleRegistry) -> Self {
        Self { modules }
    }

    /// Generate one scenario.
    ///
    /// `recent_games` must be ordered newest first; only the first
    /// `lookback` entries are consulted by the recency filter.
    pub fn generate(
        &self,
        config: &GeneratorConfig,
        pool: &OwnedPool<'_>,
        recent_games: &[GameRecord],
        rng: &mut dyn RngCore,
    ) -> Result<Scenario, GeneratorError> {
        config.validate().map_err(GeneratorError::InvalidConfig)?;

        let villains = pool.villains();
        if villains.is_empty() {
            return Err(GeneratorError::NoVillainsAvailable);
        }
        let heroes = distinct_heroes(pool.heroes());

        let (villains, heroes) = match config.exclusion_lookback() {
            Some(lookback) => {
                let window = &recent_games[..lookback.min(recent_games.len())];
                exclude_recent(villains, heroes, window, config)
            }
            None => (villains, heroes),
        };

        let villain = match villains.choose(rng) {
            Some(villain) => (*villain).clone(),
            None => return Err(GeneratorError::NoVillainsAvailable),
        };
        debug!(villain = %villain.name, candidates = villains.len(), "Selected villain");

        let difficulty = resolve_difficulty(config.difficulty, pool, rng);
        let (required_sets, additional_sets) = self.resolve_sets(config, &villain, pool, rng);

        let players = if config.randomize_heroes {
            Some(pick_players(config, &heroes, pool, rng)?)
        } else {
            None
        };

        Ok(Scenario {
            villain,
            difficulty,
            required_sets,
            additional_sets,
            players,
        })
    }

    fn resolve_sets(
        &self,
        config: &GeneratorConfig,
        villain: &Villain,
        pool: &OwnedPool<'_>,
        rng: &mut dyn RngCore,
    ) -> (Vec<String>, Vec<String>) {
        if config.additional_sets == AdditionalSets::MatchRecommended {
            if let Some(sets) = self.modules.compute(villain, config.player_count, rng) {
                debug!(villain = %villain.name, "Sets computed by generator module");
                return (sets.required_sets, sets.recommended_sets);
            }
        }

        let required_sets = villain.required_sets.clone();
        let mut candidates: Vec<&str> = pool
            .modular_sets()
            .into_iter()
            .filter(|set| !required_sets.iter().any(|required| required == set))
            .collect();
        candidates.shuffle(rng);

        let wanted = match config.additional_sets {
            AdditionalSets::Count(count) => count,
            AdditionalSets::MatchRecommended => villain.recommended_sets.len(),
        };
        let additional_sets = candidates
            .into_iter()
            .take(wanted)
            .map(str::to_string)
            .collect();

        (required_sets, additional_sets)
    }
}

/// Drop recently played villains and heroes, all or nothing.
///
/// The filtered pools are only used if at least one villain survives and,
/// when heroes are randomized, enough heroes remain for every player.
/// Otherwise the unfiltered pools are returned.
fn exclude_recent<'p>(
    villains: Vec<&'p Villain>,
    heroes: Vec<&'p Hero>,
    recent_games: &[GameRecord],
    config: &GeneratorConfig,
) -> (Vec<&'p Villain>, Vec<&'p Hero>) {
    let played_villains: HashSet<&str> = recent_games
        .iter()
        .map(|game| game.villain.name.as_str())
        .collect();
    let played_heroes: HashSet<&HeroId> = recent_games
        .iter()
        .flat_map(|game| game.players.iter().map(|p| &p.hero.id))
        .collect();

    let filtered_villains: Vec<&Villain> = villains
        .iter()
        .copied()
        .filter(|v| !played_villains.contains(v.name.as_str()))
        .collect();
    let filtered_heroes: Vec<&Hero> = heroes
        .iter()
        .copied()
        .filter(|h| !played_heroes.contains(&h.id))
        .collect();

    let enough_heroes = !config.randomize_heroes || filtered_heroes.len() >= config.player_count;
    if !filtered_villains.is_empty() && enough_heroes {
        debug!(
            excluded_villains = villains.len() - filtered_villains.len(),
            excluded_heroes = heroes.len() - filtered_heroes.len(),
            "Applied recently played filter"
        );
        (filtered_villains, filtered_heroes)
    } else {
        debug!("Recently played filter would exhaust the pool, skipping it");
        (villains, heroes)
    }
}

fn resolve_difficulty(
    requested: Difficulty,
    pool: &OwnedPool<'_>,
    rng: &mut dyn RngCore,
) -> Difficulty {
    let mut difficulty = requested;
    if requested.standard_set.is_random() {
        if let Some(tier) = pool.standard_sets().choose(rng) {
            difficulty.standard_set = *tier;
        }
    }
    difficulty
}

fn pick_players(
    config: &GeneratorConfig,
    heroes: &[&Hero],
    pool: &OwnedPool<'_>,
    rng: &mut dyn RngCore,
) -> Result<Vec<ScenarioPlayer>, GeneratorError> {
    if heroes.len() < config.player_count {
        return Err(GeneratorError::NotEnoughHeroes {
            needed: config.player_count,
            available: heroes.len(),
        });
    }

    let picked: Vec<&Hero> = heroes
        .choose_multiple(rng, config.player_count)
        .copied()
        .collect();

    let aspects = if config.randomize_aspects {
        let needed = picked.iter().map(|h| h.aspect_count()).max().unwrap_or(0);
        aspect_pool(pool, needed)
    } else {
        Vec::new()
    };

    let players = picked
        .into_iter()
        .map(|hero| {
            let aspects = if config.randomize_aspects {
                aspects
                    .choose_multiple(rng, hero.aspect_count())
                    .copied()
                    .collect()
            } else {
                hero.prebuilt_aspects.clone().unwrap_or_default()
            };
            ScenarioPlayer {
                hero: hero.clone(),
                aspects,
            }
        })
        .collect();

    Ok(players)
}

/// Aspects the randomizer may hand out, never Basic.
///
/// Owned aspect tags and the prebuilt aspects of owned heroes come first.
/// If they cannot cover `needed`, every non-Basic aspect is eligible.
fn aspect_pool(pool: &OwnedPool<'_>, needed: usize) -> Vec<Aspect> {
    let prebuilt: Vec<Aspect> = pool
        .heroes()
        .into_iter()
        .flat_map(|hero| hero.prebuilt_aspects.iter().flatten().copied())
        .collect();
    let mut aspects: BTreeSet<Aspect> = pool
        .aspects()
        .into_iter()
        .chain(prebuilt)
        .filter(|aspect| !aspect.is_basic())
        .collect();

    if aspects.len() < needed {
        debug!(owned = aspects.len(), needed, "Owned aspects too few, using every aspect");
        aspects.extend(Aspect::ALL.iter().copied().filter(|aspect| !aspect.is_basic()));
    }

    aspects.into_iter().collect()
}

fn distinct_heroes(heroes: Vec<&Hero>) -> Vec<&Hero> {
    let mut seen = HashSet::new();
    heroes
        .into_iter()
        .filter(|h| seen.insert(h.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::aggregates::Catalog;
    use crate::domain::entities::{
        ExcludeRecent, GameResult, Player, Product, ProductCategory,
    };
    use crate::domain::services::random::SeededRandom;
    use crate::domain::value_objects::{ExpertSet, GameId, ProductId, StandardSet};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn hero(id: &str, aspects: Option<Vec<Aspect>>) -> Hero {
        Hero {
            id: HeroId::new(id),
            name: id.to_string(),
            alter_ego: format!("{} alter ego", id),
            nemesis: format!("{} nemesis", id),
            prebuilt_aspects: aspects,
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            category: ProductCategory::CoreSet,
            release_date: chrono::NaiveDate::from_ymd_opt(2019, 11, 1).unwrap(),
            heroes: vec![],
            villains: vec![],
            modular_sets: vec![],
            standard_sets: vec![],
            expert_sets: vec![],
            aspects: vec![],
        }
    }

    fn rhino_product() -> Product {
        Product {
            villains: vec![Villain::new("Rhino", strings(&["Rhino"]))
                .with_recommended(strings(&["Bomb Scare"]))],
            modular_sets: strings(&["Bomb Scare", "Masters of Evil"]),
            ..product("rhino-only")
        }
    }

    fn full_product() -> Product {
        Product {
            heroes: vec![
                hero("spider-man", Some(vec![Aspect::Justice])),
                hero("she-hulk", Some(vec![Aspect::Aggression])),
                hero("spider-woman", Some(vec![Aspect::Justice, Aspect::Aggression])),
                hero("mystery", None),
            ],
            villains: vec![
                Villain::new("Rhino", strings(&["Rhino"]))
                    .with_recommended(strings(&["Bomb Scare"])),
                Villain::new("Klaw", strings(&["Klaw"]))
                    .with_recommended(strings(&["Masters of Evil"])),
                Villain::new("Crossbones", strings(&["Crossbones", "Experimental Weapons"]))
                    .with_recommended(strings(&["Hydra Patrol", "Weapon Master"])),
            ],
            modular_sets: strings(&[
                "Bomb Scare",
                "Masters of Evil",
                "Under Attack",
                "Experimental Weapons",
                "Hydra Patrol",
                "Weapon Master",
            ]),
            standard_sets: vec![StandardSet::Standard, StandardSet::StandardII],
            expert_sets: vec![ExpertSet::Expert],
            aspects: vec![
                Aspect::Basic,
                Aspect::Aggression,
                Aspect::Justice,
                Aspect::Leadership,
                Aspect::Protection,
            ],
            ..product("full")
        }
    }

    fn game_against(villain: &str, heroes: &[&str]) -> GameRecord {
        GameRecord {
            id: GameId::new(),
            date_time: Utc::now(),
            players: heroes
                .iter()
                .map(|h| Player {
                    player_name: None,
                    hero: hero(h, None),
                    aspects: vec![],
                    nemesis_encountered: false,
                })
                .collect(),
            villain: Villain::new(villain, strings(&[villain])),
            difficulty: Difficulty::default(),
            required_sets: strings(&[villain]),
            additional_sets: vec![],
            result: GameResult::Defeat,
            notes: None,
        }
    }

    fn generate(
        config: &GeneratorConfig,
        products: &[&Product],
        recent: &[GameRecord],
        seed: u64,
    ) -> Result<Scenario, GeneratorError> {
        let registry = GeneratorModuleRegistry::new();
        let pool = OwnedPool::new(products.to_vec());
        let mut rng = SeededRandom::from_seed(seed);
        ScenarioGenerator::new(&registry).generate(config, &pool, recent, &mut rng)
    }

    #[test]
    fn test_single_villain_example() {
        let rhino = rhino_product();
        let config = GeneratorConfig {
            additional_sets: AdditionalSets::Count(1),
            ..Default::default()
        };

        for seed in 0..20 {
            let scenario = generate(&config, &[&rhino], &[], seed).unwrap();
            assert_eq!(scenario.villain.name, "Rhino");
            assert_eq!(scenario.required_sets, strings(&["Rhino"]));
            assert_eq!(scenario.additional_sets.len(), 1);
            let additional = scenario.additional_sets[0].as_str();
            assert!(["Bomb Scare", "Masters of Evil"].contains(&additional));
            assert!(scenario.players.is_none());
        }
    }

    #[test]
    fn test_empty_collection_fails() {
        let err = generate(&GeneratorConfig::default(), &[], &[], 1).unwrap_err();
        assert_eq!(err, GeneratorError::NoVillainsAvailable);
        assert!(err.to_string().contains("villains available"));
    }

    #[test]
    fn test_invalid_player_count_fails() {
        let full = full_product();
        let config = GeneratorConfig {
            player_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            generate(&config, &[&full], &[], 1),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_not_enough_heroes() {
        let full = full_product();
        let mut only_two = full_product();
        only_two.heroes.truncate(2);
        let config = GeneratorConfig {
            player_count: 3,
            randomize_heroes: true,
            ..Default::default()
        };

        assert!(generate(&config, &[&full], &[], 1).is_ok());
        let err = generate(&config, &[&only_two], &[], 1).unwrap_err();
        assert_eq!(err, GeneratorError::NotEnoughHeroes { needed: 3, available: 2 });
        assert_eq!(err.to_string(), "Not enough heroes available. Need 3, have 2");
    }

    #[test]
    fn test_required_and_additional_sets_are_disjoint() {
        let full = full_product();
        for count in 0..8 {
            let config = GeneratorConfig {
                additional_sets: AdditionalSets::Count(count),
                ..Default::default()
            };
            for seed in 0..10 {
                let scenario = generate(&config, &[&full], &[], seed).unwrap();
                for set in &scenario.villain.required_sets {
                    assert!(scenario.required_sets.contains(set));
                }
                for set in &scenario.additional_sets {
                    assert!(!scenario.required_sets.contains(set));
                }
                let unique: HashSet<_> = scenario.additional_sets.iter().collect();
                assert_eq!(unique.len(), scenario.additional_sets.len());
                assert!(scenario.additional_sets.len() <= count);
            }
        }
    }

    #[test]
    fn test_additional_count_is_clamped_to_pool() {
        let rhino = rhino_product();
        let config = GeneratorConfig {
            additional_sets: AdditionalSets::Count(10),
            ..Default::default()
        };
        let scenario = generate(&config, &[&rhino], &[], 4).unwrap();
        assert_eq!(scenario.additional_sets.len(), 2);
    }

    #[test]
    fn test_match_recommended_uses_villain_count() {
        let full = full_product();
        let config = GeneratorConfig {
            additional_sets: AdditionalSets::MatchRecommended,
            ..Default::default()
        };
        for seed in 0..20 {
            let scenario = generate(&config, &[&full], &[], seed).unwrap();
            assert_eq!(
                scenario.additional_sets.len(),
                scenario.villain.recommended_sets.len()
            );
        }
    }

    #[test]
    fn test_randomized_heroes_are_distinct() {
        let full = full_product();
        for player_count in 1..=4 {
            let config = GeneratorConfig {
                player_count,
                randomize_heroes: true,
                ..Default::default()
            };
            for seed in 0..10 {
                let players = generate(&config, &[&full], &[], seed).unwrap().players.unwrap();
                assert_eq!(players.len(), player_count);
                let ids: HashSet<_> = players.iter().map(|p| &p.hero.id).collect();
                assert_eq!(ids.len(), player_count);
            }
        }
    }

    #[test]
    fn test_prebuilt_aspects_without_randomization() {
        let full = full_product();
        let config = GeneratorConfig {
            player_count: 4,
            randomize_heroes: true,
            ..Default::default()
        };
        let players = generate(&config, &[&full], &[], 3).unwrap().players.unwrap();
        for player in players {
            assert_eq!(
                player.aspects,
                player.hero.prebuilt_aspects.clone().unwrap_or_default()
            );
        }
    }

    #[test]
    fn test_randomized_aspects_match_prebuilt_count() {
        let full = full_product();
        let config = GeneratorConfig {
            player_count: 4,
            randomize_heroes: true,
            randomize_aspects: true,
            ..Default::default()
        };
        for seed in 0..20 {
            let players = generate(&config, &[&full], &[], seed).unwrap().players.unwrap();
            for player in players {
                assert_eq!(player.aspects.len(), player.hero.aspect_count());
                assert!(!player.aspects.contains(&Aspect::Basic));
                let unique: HashSet<_> = player.aspects.iter().collect();
                assert_eq!(unique.len(), player.aspects.len());
            }
        }
    }

    #[test]
    fn test_randomized_aspects_without_owned_aspect_tags() {
        let catalog = Catalog::bundled().unwrap();
        let registry = GeneratorModuleRegistry::new();
        let pool = catalog.owned_pool(&[ProductId::new("rise-of-red-skull")]);
        assert!(pool.aspects().is_empty());
        let config = GeneratorConfig {
            player_count: 2,
            randomize_heroes: true,
            randomize_aspects: true,
            ..Default::default()
        };

        for seed in 1..20 {
            let mut rng = SeededRandom::from_seed(seed);
            let players = ScenarioGenerator::new(&registry)
                .generate(&config, &pool, &[], &mut rng)
                .unwrap()
                .players
                .unwrap();
            for player in players {
                assert_eq!(player.aspects.len(), player.hero.aspect_count());
                assert!(!player.aspects.contains(&Aspect::Basic));
            }
        }
    }

    #[test]
    fn test_randomized_aspects_fall_back_to_every_aspect() {
        let bare = Product {
            villains: vec![Villain::new("Rhino", strings(&["Rhino"]))],
            heroes: vec![hero("mystery", None), hero("enigma", None)],
            ..product("bare")
        };
        let config = GeneratorConfig {
            player_count: 2,
            randomize_heroes: true,
            randomize_aspects: true,
            ..Default::default()
        };

        for seed in 0..20 {
            let players = generate(&config, &[&bare], &[], seed).unwrap().players.unwrap();
            for player in players {
                assert_eq!(player.aspects.len(), 1);
                assert!(!player.aspects[0].is_basic());
            }
        }
    }

    #[test]
    fn test_randomize_aspects_alone_has_no_effect() {
        let full = full_product();
        let config = GeneratorConfig {
            randomize_aspects: true,
            ..Default::default()
        };
        assert!(generate(&config, &[&full], &[], 1).unwrap().players.is_none());
    }

    #[test]
    fn test_random_standard_tier_resolves_to_owned_tier() {
        let full = full_product();
        let config = GeneratorConfig {
            difficulty: Difficulty::new(StandardSet::Random, ExpertSet::Expert),
            ..Default::default()
        };
        for seed in 0..10 {
            let difficulty = generate(&config, &[&full], &[], seed).unwrap().difficulty;
            assert!(matches!(
                difficulty.standard_set,
                StandardSet::Standard | StandardSet::StandardII
            ));
            assert_eq!(difficulty.expert_set, ExpertSet::Expert);
        }
    }

    #[test]
    fn test_random_standard_tier_without_owned_tiers_is_left_unresolved() {
        let rhino = rhino_product();
        let config = GeneratorConfig {
            difficulty: Difficulty::new(StandardSet::Random, ExpertSet::None),
            ..Default::default()
        };
        let difficulty = generate(&config, &[&rhino], &[], 1).unwrap().difficulty;
        assert_eq!(difficulty.standard_set, StandardSet::Random);
    }

    #[test]
    fn test_recently_played_are_excluded() {
        let full = full_product();
        let recent = vec![
            game_against("Rhino", &["spider-man"]),
            game_against("Klaw", &["she-hulk"]),
        ];
        let config = GeneratorConfig {
            player_count: 2,
            randomize_heroes: true,
            exclude_recent: Some(ExcludeRecent { lookback: 2 }),
            ..Default::default()
        };

        for seed in 0..20 {
            let scenario = generate(&config, &[&full], &recent, seed).unwrap();
            assert_eq!(scenario.villain.name, "Crossbones");
            let ids: HashSet<_> = scenario
                .players
                .unwrap()
                .into_iter()
                .map(|p| p.hero.id)
                .collect();
            assert_eq!(
                ids,
                [HeroId::new("spider-woman"), HeroId::new("mystery")].into_iter().collect()
            );
        }
    }

    #[test]
    fn test_lookback_only_considers_most_recent_games() {
        let full = full_product();
        let recent = vec![
            game_against("Rhino", &[]),
            game_against("Klaw", &[]),
            game_against("Crossbones", &[]),
        ];
        let config = GeneratorConfig {
            exclude_recent: Some(ExcludeRecent { lookback: 2 }),
            ..Default::default()
        };
        for seed in 0..10 {
            assert_eq!(
                generate(&config, &[&full], &recent, seed).unwrap().villain.name,
                "Crossbones"
            );
        }
    }

    #[test]
    fn test_exclusion_is_skipped_when_it_would_exhaust_villains() {
        let full = full_product();
        let recent = vec![
            game_against("Rhino", &[]),
            game_against("Klaw", &[]),
            game_against("Crossbones", &[]),
        ];
        let config = GeneratorConfig {
            exclude_recent: Some(ExcludeRecent { lookback: 10 }),
            ..Default::default()
        };

        let seen: HashSet<String> = (0..40)
            .map(|seed| generate(&config, &[&full], &recent, seed).unwrap().villain.name)
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_exclusion_is_skipped_when_it_would_exhaust_heroes() {
        let full = full_product();
        let recent = vec![game_against("Rhino", &["spider-man", "she-hulk", "spider-woman"])];
        let config = GeneratorConfig {
            player_count: 2,
            randomize_heroes: true,
            exclude_recent: Some(ExcludeRecent { lookback: 1 }),
            ..Default::default()
        };

        let scenario = generate(&config, &[&full], &recent, 8).unwrap();
        assert_eq!(scenario.players.unwrap().len(), 2);

        let seen: HashSet<String> = (0..40)
            .map(|seed| generate(&config, &[&full], &recent, seed).unwrap().villain.name)
            .collect();
        assert!(seen.contains("Rhino"));
    }

    #[test]
    fn test_module_villain_delegates_when_matching_recommended() {
        let catalog = Catalog::bundled().unwrap();
        let registry = GeneratorModuleRegistry::with_defaults(&catalog);
        let pool = catalog.owned_pool(&[ProductId::new("cycle6-mojo-mania")]);
        let mojo_sets: Vec<String> = pool.products()[0].modular_sets.clone();
        let config = GeneratorConfig {
            player_count: 2,
            additional_sets: AdditionalSets::MatchRecommended,
            ..Default::default()
        };

        for seed in 0..30 {
            let mut rng = SeededRandom::from_seed(seed);
            let scenario = ScenarioGenerator::new(&registry)
                .generate(&config, &pool, &[], &mut rng)
                .unwrap();

            assert_eq!(scenario.required_sets[0], scenario.villain.name);
            match scenario.villain.name.as_str() {
                "MaGog" => {
                    assert_eq!(scenario.required_sets.len(), 1);
                    assert!(!scenario.additional_sets.is_empty());
                }
                "Spiral" => {
                    assert!(scenario.required_sets.len() >= 4);
                    assert!(scenario.additional_sets.is_empty());
                }
                "Mojo" => {
                    assert!(scenario.required_sets.len() >= 4);
                    assert!(scenario.additional_sets.is_empty());
                }
                other => panic!("unexpected villain {}", other),
            }
            for set in scenario.required_sets.iter().skip(1) {
                assert!(mojo_sets.contains(set));
            }
            for set in &scenario.additional_sets {
                assert!(!scenario.required_sets.contains(set));
            }
        }
    }

    #[test]
    fn test_module_villain_uses_default_path_with_literal_count() {
        let catalog = Catalog::bundled().unwrap();
        let registry = GeneratorModuleRegistry::with_defaults(&catalog);
        let pool = catalog.owned_pool(&[ProductId::new("cycle6-mojo-mania")]);
        let config = GeneratorConfig {
            additional_sets: AdditionalSets::Count(2),
            ..Default::default()
        };

        let mut rng = SeededRandom::from_seed(1);
        let scenario = ScenarioGenerator::new(&registry)
            .generate(&config, &pool, &[], &mut rng)
            .unwrap();
        assert_eq!(scenario.required_sets, scenario.villain.required_sets);
        assert_eq!(scenario.additional_sets.len(), 2);
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let full = full_product();
        let config = GeneratorConfig {
            player_count: 2,
            additional_sets: AdditionalSets::Count(2),
            randomize_heroes: true,
            randomize_aspects: true,
            ..Default::default()
        };
        assert_eq!(
            generate(&config, &[&full], &[], 99).unwrap(),
            generate(&config, &[&full], &[], 99).unwrap()
        );
    }
}
