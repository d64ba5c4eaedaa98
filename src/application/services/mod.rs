//! Application services - Use case implementations
//!
//! Each service accepts repository ports and the shared catalog, and returns
//! domain entities or DTOs. Storage failures surface as `ServiceError`.

pub mod achievement_service;
pub mod collection_service;
pub mod dashboard_service;
pub mod data_transfer_service;
pub mod error;
pub mod game_log_service;
pub mod generator_service;
pub mod settings_service;

pub use achievement_service::AchievementService;
pub use collection_service::{CollectionService, CollectionSummary};
pub use dashboard_service::DashboardService;
pub use data_transfer_service::DataTransferService;
pub use error::{ServiceError, ServiceResult};
pub use game_log_service::GameLogService;
pub use generator_service::GeneratorService;
pub use settings_service::SettingsService;
