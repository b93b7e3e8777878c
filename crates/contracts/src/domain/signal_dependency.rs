use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed edge between two monitored fields. The graph may contain
/// cycles; no acyclicity invariant is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDependency {
    pub id: i32,
    pub event_id: Option<i32>,
    pub source_bundle: String,
    pub source_field: String,
    pub target_bundle: String,
    pub target_field: String,
    /// direct, computed, derived
    pub dependency_type: String,
    pub weight: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSignalDependency {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub source_bundle: String,
    pub source_field: String,
    pub target_bundle: String,
    pub target_field: String,
    pub dependency_type: String,
    #[serde(default = "default_weight")]
    pub weight: Option<i32>,
}

fn default_weight() -> Option<i32> {
    Some(1)
}
