use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point-in-time rollup of sales KPIs.
///
/// `total_sales` is stored verbatim for audit purposes, but the latest-read
/// path always serves a value recomputed from regional revenue; the stored
/// number is never returned there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub id: i32,
    pub event_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
    pub total_sales: String,
    pub active_customers: i32,
    pub avg_basket_size: String,
    pub conversion_rate: String,
    pub inventory_health: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSalesMetrics {
    #[serde(default)]
    pub event_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
    pub total_sales: String,
    pub active_customers: i32,
    pub avg_basket_size: String,
    pub conversion_rate: String,
    pub inventory_health: String,
}
