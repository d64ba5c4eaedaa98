//! Data Transfer Objects - For API boundaries
//!
//! Request and response shapes that are not domain entities in their own
//! right. Domain entities carry serde derives already and are returned as-is.

pub mod dashboard;
pub mod export;
pub mod generator;

pub use dashboard::DashboardSummary;
pub use export::{ExportData, ImportMode, ImportRequest, EXPORT_VERSION};
pub use generator::{RerollRequest, ScenarioPromotion};
