//! Value objects - Immutable objects defined by their attributes

mod aspect;
mod difficulty;
mod ids;
mod settings;

pub use aspect::Aspect;
pub use difficulty::{Difficulty, ExpertSet, StandardSet};
pub use ids::*;
pub use settings::{AppSettings, SettingsUpdate, Theme};
