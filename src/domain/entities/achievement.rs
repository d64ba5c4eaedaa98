//! Achievement entity - Milestones tracked against the game log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AchievementId, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    #[serde(rename = "Games Played")]
    GamesPlayed,
    #[serde(rename = "Villain Defeats")]
    VillainDefeats,
    #[serde(rename = "Hero Victories")]
    HeroVictories,
    Nemesis,
    Difficulty,
    Collection,
    General,
}

/// What has to happen for an achievement to complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementRequirement {
    GamesWon { count: u32 },
    GamesPlayed { count: u32 },
    /// Villain matched by name
    VillainDefeat { villain: String, count: u32 },
    NemesisTotal { count: u32 },
    /// Win at least once at exactly this difficulty
    DifficultyConfig { difficulty: Difficulty },
    WinStreak { count: u32 },
}

impl AchievementRequirement {
    /// Progress value at which the requirement is met
    pub fn target(&self) -> u32 {
        match self {
            AchievementRequirement::GamesWon { count }
            | AchievementRequirement::GamesPlayed { count }
            | AchievementRequirement::VillainDefeat { count, .. }
            | AchievementRequirement::NemesisTotal { count }
            | AchievementRequirement::WinStreak { count } => *count,
            AchievementRequirement::DifficultyConfig { .. } => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    /// Auto-tracked achievements are recomputed from the game log;
    /// the rest are ticked off by hand
    pub is_auto_tracked: bool,
    pub requirement: AchievementRequirement,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn new(
        id: impl Into<AchievementId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: AchievementCategory,
        requirement: AchievementRequirement,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            is_auto_tracked: true,
            requirement,
            progress: 0,
            is_completed: false,
            completed_date: None,
        }
    }

    pub fn manual(mut self) -> Self {
        self.is_auto_tracked = false;
        self
    }

    /// Record new progress. Completion is sticky: once reached it keeps its
    /// original date even if progress later drops (e.g. a game is deleted).
    pub fn record_progress(&mut self, progress: u32, now: DateTime<Utc>) -> bool {
        let was_completed = self.is_completed;
        self.progress = progress.min(self.requirement.target());
        if !self.is_completed && progress >= self.requirement.target() {
            self.is_completed = true;
            self.completed_date = Some(now);
        }
        !was_completed && self.is_completed
    }
}

/// Partial update of an achievement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementUpdate {
    pub progress: Option<u32>,
    pub is_completed: Option<bool>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn apply(&mut self, update: AchievementUpdate) {
        if let Some(progress) = update.progress {
            self.progress = progress;
        }
        if let Some(is_completed) = update.is_completed {
            self.is_completed = is_completed;
            if !is_completed {
                self.completed_date = None;
            }
        }
        if let Some(completed_date) = update.completed_date {
            self.completed_date = Some(completed_date);
        }
    }
}

/// Achievements seeded into an empty store
pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first-game",
            "First Steps",
            "Log your first finished game",
            AchievementCategory::GamesPlayed,
            AchievementRequirement::GamesPlayed { count: 1 },
        ),
        Achievement::new(
            "veteran",
            "Veteran",
            "Finish 25 games",
            AchievementCategory::GamesPlayed,
            AchievementRequirement::GamesPlayed { count: 25 },
        ),
        Achievement::new(
            "five-wins",
            "Hero of the Day",
            "Win 5 games",
            AchievementCategory::General,
            AchievementRequirement::GamesWon { count: 5 },
        ),
        Achievement::new(
            "rhino-tamer",
            "Rhino Tamer",
            "Defeat Rhino 3 times",
            AchievementCategory::VillainDefeats,
            AchievementRequirement::VillainDefeat {
                villain: "Rhino".to_string(),
                count: 3,
            },
        ),
        Achievement::new(
            "old-enemies",
            "Old Enemies",
            "Encounter 10 nemeses",
            AchievementCategory::Nemesis,
            AchievementRequirement::NemesisTotal { count: 10 },
        ),
        Achievement::new(
            "expert-victory",
            "Expert Victory",
            "Win a game on Standard + Expert",
            AchievementCategory::Difficulty,
            AchievementRequirement::DifficultyConfig {
                difficulty: Difficulty::new(
                    crate::domain::value_objects::StandardSet::Standard,
                    crate::domain::value_objects::ExpertSet::Expert,
                ),
            },
        ),
        Achievement::new(
            "hot-streak",
            "Hot Streak",
            "Win 3 games in a row",
            AchievementCategory::General,
            AchievementRequirement::WinStreak { count: 3 },
        ),
    ]
}
