//! Settings API routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::value_objects::{AppSettings, SettingsUpdate};
use crate::infrastructure::state::AppState;

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<AppSettings> {
    Json(state.settings_service.get().await)
}

/// Merge the given fields into the stored settings
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<AppSettings>, (StatusCode, String)> {
    state
        .settings_service
        .update(update)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

pub async fn reset_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AppSettings>, (StatusCode, String)> {
    state
        .settings_service
        .reset()
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
