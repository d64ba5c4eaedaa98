//! Achievement API routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::domain::entities::{Achievement, AchievementUpdate};
use crate::domain::value_objects::AchievementId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// Achievements completed by this check
    pub completed: Vec<AchievementId>,
}

pub async fn list_achievements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
    state
        .achievement_service
        .list()
        .await
        .map(Json)
        .map_err(api_error)
}

/// Re-evaluate auto-tracked achievements against the game log
pub async fn check_achievements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CheckResponse>, ApiError> {
    let completed = state
        .achievement_service
        .check()
        .await
        .map_err(api_error)?;
    Ok(Json(CheckResponse { completed }))
}

pub async fn update_achievement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<AchievementUpdate>,
) -> Result<Json<Achievement>, ApiError> {
    state
        .achievement_service
        .update(&AchievementId::new(id), update)
        .await
        .map(Json)
        .map_err(api_error)
}
