use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed promotional campaign (e.g. Black Friday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesEvent {
    pub id: i32,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Fixed-precision decimal, stored as text.
    pub target_revenue: String,
    /// planned, active, completed
    pub status: String,
    /// Opaque widget configuration blob; never interpreted server-side.
    pub signal_config: Option<serde_json::Value>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert schema: full record minus server-generated `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSalesEvent {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub target_revenue: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub signal_config: Option<serde_json::Value>,
}

fn default_status() -> String {
    "planned".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesEventPatch {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub target_revenue: Option<String>,
    pub status: Option<String>,
    pub signal_config: Option<serde_json::Value>,
}

impl SalesEvent {
    /// Overwrites only the fields the patch supplies.
    pub fn apply(&mut self, patch: &SalesEventPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = patch.start_date {
            self.start_date = v;
        }
        if let Some(v) = patch.end_date {
            self.end_date = v;
        }
        if let Some(v) = &patch.target_revenue {
            self.target_revenue = v.clone();
        }
        if let Some(v) = &patch.status {
            self.status = v.clone();
        }
        if let Some(v) = &patch.signal_config {
            self.signal_config = Some(v.clone());
        }
    }
}
