//! Collection API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::error::{api_error, ApiError};
use crate::application::services::CollectionSummary;
use crate::domain::value_objects::ProductId;
use crate::infrastructure::state::AppState;

#[derive(Debug, Serialize)]
pub struct OwnershipResponse {
    pub product_id: ProductId,
    pub owned: bool,
}

/// Owned product ids and counts
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionSummary>, ApiError> {
    state
        .collection_service
        .summary()
        .await
        .map(Json)
        .map_err(api_error)
}

/// Mark a product as owned
pub async fn add_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .collection_service
        .add(&ProductId::new(id))
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a product as not owned
pub async fn remove_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .collection_service
        .remove(&ProductId::new(id))
        .await
        .map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Flip ownership of a product
pub async fn toggle_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OwnershipResponse>, ApiError> {
    let product_id = ProductId::new(id);
    let owned = state
        .collection_service
        .toggle(&product_id)
        .await
        .map_err(api_error)?;

    Ok(Json(OwnershipResponse { product_id, owned }))
}
