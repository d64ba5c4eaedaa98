//! Application configuration

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "UTILITY_BELT";

/// Application configuration loaded from environment
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,
    /// SQLite connection URL, used by the sqlite backend
    pub database_url: String,
    /// Key-value store backend: "sqlite" or "memory"
    pub storage_backend: String,
    /// Number of recent games shown on the dashboard
    pub recent_games_limit: usize,
}

impl AppConfig {
    /// Load configuration from `UTILITY_BELT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    fn load(environment: Environment) -> Result<Self> {
        Config::builder()
            .set_default("server_port", 3000)?
            .set_default("database_url", "sqlite://utility_belt.db?mode=rwc")?
            .set_default("storage_backend", "sqlite")?
            .set_default("recent_games_limit", 5)?
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
