//! Domain entities - Core business objects

mod achievement;
mod collection;
mod game;
mod product;
mod scenario;

pub use achievement::{
    default_achievements, Achievement, AchievementCategory, AchievementRequirement,
    AchievementUpdate,
};
pub use collection::CollectionItem;
pub use game::{
    GameRecord, GameRecordUpdate, GameResult, NewGameRecord, Player, MAX_PLAYERS, MIN_PLAYERS,
};
pub use product::{
    DrawRule, GeneratorModuleId, GeneratorModuleRef, Hero, Product, ProductCategory, Villain,
};
pub use scenario::{
    AdditionalSets, ExcludeRecent, GeneratorConfig, RerollKind, Scenario, ScenarioPlayer,
};
