use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A responder (human or automated agent) coordinating on one incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarRoomParticipant {
    pub id: i32,
    pub incident_id: Option<i32>,
    /// ai, human
    pub participant_type: String,
    pub name: String,
    pub role: String,
    /// active, standby, completed
    pub status: String,
    pub description: Option<String>,
    pub eta_minutes: Option<i32>,
    pub badge_color: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertWarRoomParticipant {
    #[serde(default)]
    pub incident_id: Option<i32>,
    pub participant_type: String,
    pub name: String,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub eta_minutes: Option<i32>,
    #[serde(default)]
    pub badge_color: Option<String>,
}

/// A candidate remediation strategy for an incident. Reads are ordered by
/// `priority` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResolutionPath {
    pub id: i32,
    pub incident_id: Option<i32>,
    pub path_name: String,
    /// current, fallback, nuclear
    pub path_type: String,
    pub description: String,
    /// Success rate as an integer percentage.
    pub success_rate: i32,
    pub time_estimate: Option<String>,
    pub tradeoffs: Option<String>,
    pub priority: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertIncidentResolutionPath {
    #[serde(default)]
    pub incident_id: Option<i32>,
    pub path_name: String,
    pub path_type: String,
    pub description: String,
    pub success_rate: i32,
    #[serde(default)]
    pub time_estimate: Option<String>,
    #[serde(default)]
    pub tradeoffs: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}
