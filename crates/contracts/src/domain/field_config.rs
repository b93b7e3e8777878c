use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-selected (bundle, source, field) tuple to monitor.
///
/// Uniqueness of the tuple per event is not enforced; duplicates are
/// allowed. `retention_days` is stored but never enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFieldConfig {
    pub id: i32,
    pub event_id: Option<i32>,
    pub bundle_id: String,
    pub data_source: String,
    pub field_name: String,
    pub update_frequency: String,
    pub retention_days: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDataFieldConfig {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub bundle_id: String,
    pub data_source: String,
    pub field_name: String,
    #[serde(default = "default_update_frequency")]
    pub update_frequency: String,
    #[serde(default = "default_retention_days")]
    pub retention_days: i32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_update_frequency() -> String {
    "realtime".to_string()
}

fn default_retention_days() -> i32 {
    7
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFieldConfigPatch {
    pub event_id: Option<i32>,
    pub bundle_id: Option<String>,
    pub data_source: Option<String>,
    pub field_name: Option<String>,
    pub update_frequency: Option<String>,
    pub retention_days: Option<i32>,
    pub is_active: Option<bool>,
}

impl DataFieldConfig {
    pub fn apply(&mut self, patch: &DataFieldConfigPatch) {
        if let Some(v) = patch.event_id {
            self.event_id = Some(v);
        }
        if let Some(v) = &patch.bundle_id {
            self.bundle_id = v.clone();
        }
        if let Some(v) = &patch.data_source {
            self.data_source = v.clone();
        }
        if let Some(v) = &patch.field_name {
            self.field_name = v.clone();
        }
        if let Some(v) = &patch.update_frequency {
            self.update_frequency = v.clone();
        }
        if let Some(v) = patch.retention_days {
            self.retention_days = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
    }
}
