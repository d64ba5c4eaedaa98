//! User settings value object
//!
//! AppSettings carries serde derives because it is stored as a JSON value in
//! the settings store and travels over the REST API unchanged.

use serde::{Deserialize, Serialize};

use super::{Difficulty, ExpertSet, StandardSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// All user-configurable settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Difficulty pre-selected by the generator form and new game entries
    pub default_difficulty: Difficulty,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::new(StandardSet::Standard, ExpertSet::None),
            theme: Theme::Light,
        }
    }
}

/// Partial settings update; absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub default_difficulty: Option<Difficulty>,
    pub theme: Option<Theme>,
}

impl AppSettings {
    pub fn apply(mut self, update: SettingsUpdate) -> Self {
        if let Some(difficulty) = update.default_difficulty {
            self.default_difficulty = difficulty;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        self
    }
}
