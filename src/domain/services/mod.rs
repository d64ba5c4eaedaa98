//! Domain services - Pure logic over entities and the catalog

pub mod achievement_tracker;
pub mod generator_modules;
pub mod random;
pub mod scenario_generator;
pub mod statistics;

pub use generator_modules::{GeneratorModule, GeneratorModuleRegistry, ModuleSets, PoolDrawModule};
pub use random::SeededRandom;
pub use scenario_generator::{GeneratorError, ScenarioGenerator};
pub use statistics::{GameStatistics, HeroStats, VillainStats};
