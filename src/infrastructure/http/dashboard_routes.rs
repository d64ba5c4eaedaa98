//! Dashboard API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::application::dto::DashboardSummary;
use crate::infrastructure::state::AppState;

pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummary>, ApiError> {
    state
        .dashboard_service
        .summary()
        .await
        .map(Json)
        .map_err(api_error)
}
