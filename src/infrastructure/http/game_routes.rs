//! Game log API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::application::dto::ScenarioPromotion;
use crate::domain::entities::{GameRecord, GameRecordUpdate, NewGameRecord};
use crate::domain::value_objects::GameId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub count: Option<usize>,
}

fn parse_game_id(id: &str) -> Result<GameId, ApiError> {
    id.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid game ID".to_string()))
}

/// List all games, newest first
pub async fn list_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    state
        .game_log_service
        .list()
        .await
        .map(Json)
        .map_err(api_error)
}

/// Log a new game
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(game): Json<NewGameRecord>,
) -> Result<(StatusCode, Json<GameRecord>), ApiError> {
    let record = state
        .game_log_service
        .add(game)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// The `count` most recent games
pub async fn recent_games(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    let count = query.count.unwrap_or(state.config.recent_games_limit);
    state
        .game_log_service
        .recent(count)
        .await
        .map(Json)
        .map_err(api_error)
}

/// Get a game by ID
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GameRecord>, ApiError> {
    let id = parse_game_id(&id)?;
    state
        .game_log_service
        .get(id)
        .await
        .map(Json)
        .map_err(api_error)
}

/// Partially update a game
pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<GameRecordUpdate>,
) -> Result<Json<GameRecord>, ApiError> {
    let id = parse_game_id(&id)?;
    state
        .game_log_service
        .update(id, update)
        .await
        .map(Json)
        .map_err(api_error)
}

/// Delete a game
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_game_id(&id)?;
    state
        .game_log_service
        .delete(id)
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Log a generated scenario as a game
pub async fn create_from_scenario(
    State(state): State<Arc<AppState>>,
    Json(promotion): Json<ScenarioPromotion>,
) -> Result<(StatusCode, Json<GameRecord>), ApiError> {
    let record = state
        .game_log_service
        .promote(promotion)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(record)))
}
