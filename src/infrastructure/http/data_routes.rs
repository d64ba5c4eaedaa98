//! Data export, import and wipe routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::application::dto::{ExportData, ImportRequest};
use crate::infrastructure::state::AppState;

/// Export every store as one document
pub async fn export_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExportData>, ApiError> {
    state
        .data_transfer_service
        .export()
        .await
        .map(Json)
        .map_err(api_error)
}

/// Import a previously exported document
pub async fn import_data(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .data_transfer_service
        .import(req)
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the collection, games and achievements
pub async fn clear_data(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state
        .data_transfer_service
        .clear_all()
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}
