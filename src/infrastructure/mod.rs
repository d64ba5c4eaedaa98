//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: key-value store adapters (SQLite, in-memory) and repositories
//! - HTTP: REST API routes
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
