use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{product::Product, store::Store};

/// Stock of one product in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i32,
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub region: String,
    pub current_stock: i32,
    pub min_threshold: i32,
    pub last_updated: Option<DateTime<Utc>>,
}

impl InventoryRecord {
    /// Low stock means restock is imminent: at or below the per-item
    /// threshold.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_threshold
    }
}

/// An inventory record stitched with its product and store rows. The
/// references are soft; a dangling id surfaces as `null`, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub product: Option<Product>,
    pub store: Option<Store>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertInventory {
    #[serde(default)]
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub region: String,
    pub current_stock: i32,
    pub min_threshold: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPatch {
    pub product_id: Option<i32>,
    pub store_id: Option<i32>,
    pub region: Option<String>,
    pub current_stock: Option<i32>,
    pub min_threshold: Option<i32>,
}

impl InventoryRecord {
    pub fn apply(&mut self, patch: &InventoryPatch, now: DateTime<Utc>) {
        if let Some(v) = patch.product_id {
            self.product_id = Some(v);
        }
        if let Some(v) = patch.store_id {
            self.store_id = v;
        }
        if let Some(v) = &patch.region {
            self.region = v.clone();
        }
        if let Some(v) = patch.current_stock {
            self.current_stock = v;
        }
        if let Some(v) = patch.min_threshold {
            self.min_threshold = v;
        }
        self.last_updated = Some(now);
    }
}
