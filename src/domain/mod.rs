//! Domain layer - Core business logic with no I/O
//!
//! This layer contains:
//! - Entities: Product, Hero, Villain, GameRecord, Scenario, Achievement
//! - Value Objects: ids, aspects, difficulty tiers, settings
//! - Aggregates: the product Catalog and the owned-content pool
//! - Domain Services: scenario generation, generator modules, statistics,
//!   achievement tracking

pub mod aggregates;
pub mod entities;
pub mod services;
pub mod value_objects;
