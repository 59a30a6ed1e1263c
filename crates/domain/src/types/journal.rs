//! Journal records and growth stages
//!
//! Referential integrity (a record's `plant_id` existing, a stage being in
//! use) is the server's responsibility; these are transport shapes only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dated observation attached to a plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    pub id: String,
    pub plant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_stage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Named growth stage in a plant's lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthStage {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordering hint within the lifecycle, lower comes first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}
