use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current health of one monitored subsystem. No history is retained; a
/// single row per component is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComponent {
    pub id: i32,
    pub name: String,
    /// operational, degraded, down
    pub status: String,
    pub response_time_ms: Option<i32>,
    pub last_check: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSystemComponent {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub response_time_ms: Option<i32>,
}

/// Body of the component status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComponentUpdate {
    pub status: String,
    #[serde(default)]
    pub response_time: Option<i32>,
}
