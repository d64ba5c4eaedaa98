//! HTTP REST API routes

mod achievement_routes;
mod catalog_routes;
mod collection_routes;
mod dashboard_routes;
mod data_routes;
mod error;
mod game_routes;
mod generator_routes;
mod settings_routes;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Catalog routes
        .route("/api/catalog/products", get(catalog_routes::list_products))
        .route("/api/catalog/products/{id}", get(catalog_routes::get_product))
        .route("/api/catalog/heroes", get(catalog_routes::list_heroes))
        .route("/api/catalog/villains", get(catalog_routes::list_villains))
        .route(
            "/api/catalog/modular-sets",
            get(catalog_routes::list_modular_sets),
        )
        .route("/api/catalog/aspects", get(catalog_routes::list_aspects))
        // Collection routes
        .route("/api/collection", get(collection_routes::get_collection))
        .route(
            "/api/collection/{id}",
            put(collection_routes::add_product).delete(collection_routes::remove_product),
        )
        .route(
            "/api/collection/{id}/toggle",
            post(collection_routes::toggle_product),
        )
        // Game log routes
        .route(
            "/api/games",
            get(game_routes::list_games).post(game_routes::create_game),
        )
        .route("/api/games/recent", get(game_routes::recent_games))
        .route(
            "/api/games/from-scenario",
            post(game_routes::create_from_scenario),
        )
        .route(
            "/api/games/{id}",
            get(game_routes::get_game)
                .put(game_routes::update_game)
                .delete(game_routes::delete_game),
        )
        // Generator routes
        .route("/api/generator/generate", post(generator_routes::generate))
        .route("/api/generator/reroll", post(generator_routes::reroll))
        .route("/api/generator/last-error", get(generator_routes::last_error))
        // Dashboard
        .route("/api/dashboard", get(dashboard_routes::get_dashboard))
        // Achievement routes
        .route(
            "/api/achievements",
            get(achievement_routes::list_achievements),
        )
        .route(
            "/api/achievements/check",
            post(achievement_routes::check_achievements),
        )
        .route(
            "/api/achievements/{id}",
            put(achievement_routes::update_achievement),
        )
        // Settings routes
        .route(
            "/api/settings",
            get(settings_routes::get_settings).put(settings_routes::update_settings),
        )
        .route("/api/settings/reset", post(settings_routes::reset_settings))
        // Data transfer routes
        .route("/api/data/export", get(data_routes::export_data))
        .route("/api/data/import", post(data_routes::import_data))
        .route("/api/data", axum::routing::delete(data_routes::clear_data))
}
