//! Scenario generator API routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::application::dto::RerollRequest;
use crate::domain::entities::{GeneratorConfig, Scenario};
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct LastErrorResponse {
    pub error: Option<String>,
}

/// Generate a scenario from the owned collection
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(config): Json<GeneratorConfig>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario = state
        .generator_service
        .generate(&config)
        .await
        .map_err(api_error)?;
    Ok(Json(scenario))
}

/// Re-roll part of a previously generated scenario
pub async fn reroll(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RerollRequest>,
) -> Result<Json<Scenario>, ApiError> {
    let scenario = state
        .generator_service
        .reroll(req.kind, req.previous, &req.config)
        .await
        .map_err(api_error)?;
    Ok(Json(scenario))
}

/// Message of the most recent failed generation
pub async fn last_error(State(state): State<Arc<AppState>>) -> Json<LastErrorResponse> {
    Json(LastErrorResponse {
        error: state.generator_service.last_error().await,
    })
}
