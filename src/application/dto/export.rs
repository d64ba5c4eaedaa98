use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Achievement, CollectionItem, GameRecord};
use crate::domain::value_objects::AppSettings;

pub const EXPORT_VERSION: &str = "0.1";

/// Full snapshot of user data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub collection: Vec<CollectionItem>,
    pub games: Vec<GameRecord>,
    pub achievements: Vec<Achievement>,
    pub settings: AppSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Clear existing data first
    #[default]
    Replace,
    /// Overwrite entries with matching keys, keep the rest
    Merge,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub mode: ImportMode,
    pub data: ExportData,
}
