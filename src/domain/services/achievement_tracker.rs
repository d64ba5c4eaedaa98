//! Achievement tracking - Recomputes auto-tracked progress from the game log

use chrono::{DateTime, Utc};

use super::statistics::longest_win_streak;
use crate::domain::entities::{Achievement, AchievementRequirement, GameRecord};
use crate::domain::value_objects::AchievementId;

/// Raw progress towards a requirement, before clamping to its target
pub fn progress_for(requirement: &AchievementRequirement, games: &[GameRecord]) -> u32 {
    let finished = || games.iter().filter(|g| g.result.is_finished());

    let progress = match requirement {
        AchievementRequirement::GamesWon { .. } => finished().filter(|g| g.is_victory()).count(),
        AchievementRequirement::GamesPlayed { .. } => finished().count(),
        AchievementRequirement::VillainDefeat { villain, .. } => finished()
            .filter(|g| g.is_victory() && &g.villain.name == villain)
            .count(),
        AchievementRequirement::NemesisTotal { .. } => {
            games.iter().map(GameRecord::nemesis_encounters).sum()
        }
        AchievementRequirement::DifficultyConfig { difficulty } => finished()
            .any(|g| g.is_victory() && g.difficulty == *difficulty)
            .into(),
        AchievementRequirement::WinStreak { .. } => longest_win_streak(games),
    };

    u32::try_from(progress).unwrap_or(u32::MAX)
}

/// Update every auto-tracked achievement in place.
///
/// Returns the ids of achievements completed by this pass.
pub fn track(
    achievements: &mut [Achievement],
    games: &[GameRecord],
    now: DateTime<Utc>,
) -> Vec<AchievementId> {
    achievements
        .iter_mut()
        .filter(|a| a.is_auto_tracked)
        .filter_map(|achievement| {
            let progress = progress_for(&achievement.requirement, games);
            achievement
                .record_progress(progress, now)
                .then(|| achievement.id.clone())
        })
        .collect()
}
