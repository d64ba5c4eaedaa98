//! Catalog API routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::entities::{Hero, Product, Villain};
use crate::domain::value_objects::{Aspect, ProductId};
use crate::infrastructure::state::AppState;

/// List every product in the catalog
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, (StatusCode, String)> {
    state
        .catalog
        .product(&ProductId::new(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Product not found".to_string()))
}

pub async fn list_heroes(State(state): State<Arc<AppState>>) -> Json<Vec<Hero>> {
    Json(state.catalog.heroes().into_iter().cloned().collect())
}

pub async fn list_villains(State(state): State<Arc<AppState>>) -> Json<Vec<Villain>> {
    Json(state.catalog.villains().into_iter().cloned().collect())
}

pub async fn list_modular_sets(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .modular_sets()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

pub async fn list_aspects(State(state): State<Arc<AppState>>) -> Json<Vec<Aspect>> {
    Json(state.catalog.aspects())
}
