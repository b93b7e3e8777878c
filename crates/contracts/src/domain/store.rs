use serde::{Deserialize, Serialize};

/// A regional storefront aggregate. One row carries a *region's* store
/// count, not a single physical location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub address: Option<String>,
    /// active, maintenance, closed
    pub status: String,
    pub store_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertStore {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub store_count: i32,
}

fn default_status() -> String {
    "active".to_string()
}
