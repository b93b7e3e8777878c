use serde::{Deserialize, Serialize};

/// A sellable SKU. `sku` is unique, enforced by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub size: Option<String>,
    /// Fixed-precision decimal, stored as text.
    pub price: String,
    pub sku: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProduct {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub size: Option<String>,
    pub price: String,
    pub sku: String,
    #[serde(default)]
    pub description: Option<String>,
}
