//! Response shapes for derived dashboard rollups.

use serde::{Deserialize, Serialize};

/// Store totals computed from regional sales rows. The active-store split is
/// a display constant applied to the total, not derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreMetrics {
    pub total_stores: i32,
    pub active_stores: i32,
    pub inactive_stores: i32,
    pub regions: i32,
}

/// Regional revenue stitched with the region's store count. The join is by
/// region name; an unmatched region carries a store count of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalPerformance {
    pub region: String,
    pub revenue: String,
    pub store_count: i32,
    pub growth_rate: String,
    pub performance_vs_target: String,
}
