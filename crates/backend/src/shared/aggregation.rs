//! Pure derivations shared by both storage backends and the rollup routes.

use std::collections::HashMap;

use contracts::dashboards::{RegionalPerformance, StoreMetrics};
use contracts::domain::reporting::RegionalSalesData;
use contracts::domain::store::Store;

/// Online-channel share added on top of regional retail revenue; online
/// orders are not captured regionally.
pub const ONLINE_SALES_RATIO: f64 = 0.18;

/// Display constant for the active-store split. There is no backing
/// computation; do not treat it as derived state.
pub const ACTIVE_STORE_RATIO: f64 = 0.95;

/// Total sales served on the latest-metrics path: the sum of regional
/// revenue plus the online estimate, to two decimals. The snapshot's own
/// stored total is ignored here. Unparseable revenue counts as zero.
pub fn recompute_total_sales(regional: &[RegionalSalesData]) -> String {
    let retail: f64 = regional
        .iter()
        .map(|r| r.revenue.parse::<f64>().unwrap_or(0.0))
        .sum();
    format!("{:.2}", retail * (1.0 + ONLINE_SALES_RATIO))
}

/// Store totals across all regional rows.
pub fn store_metrics(regional: &[RegionalSalesData]) -> StoreMetrics {
    let total: i32 = regional.iter().map(|r| r.store_count).sum();
    let active = (total as f64 * ACTIVE_STORE_RATIO).floor() as i32;
    StoreMetrics {
        total_stores: total,
        active_stores: active,
        inactive_stores: total - active,
        regions: regional.len() as i32,
    }
}

/// Stitches regional revenue with store-count rows by region name. There is
/// no referential integrity between the two tables; a region without a
/// matching store row gets a count of zero, never an error.
pub fn regional_performance(
    regional: &[RegionalSalesData],
    stores: &[Store],
) -> Vec<RegionalPerformance> {
    let counts: HashMap<&str, i32> = stores
        .iter()
        .map(|s| (s.region.as_str(), s.store_count))
        .collect();

    regional
        .iter()
        .map(|r| RegionalPerformance {
            region: r.region.clone(),
            revenue: r.revenue.clone(),
            store_count: counts.get(r.region.as_str()).copied().unwrap_or(0),
            growth_rate: r.growth_rate.clone(),
            performance_vs_target: r.performance_vs_target.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regional_row(region: &str, revenue: &str, store_count: i32) -> RegionalSalesData {
        RegionalSalesData {
            id: 0,
            event_id: Some(1),
            region: region.to_string(),
            store_count,
            revenue: revenue.to_string(),
            growth_rate: "10.00".to_string(),
            performance_vs_target: "100.00".to_string(),
            last_updated: None,
        }
    }

    #[test]
    fn total_sales_adds_online_estimate() {
        let rows = vec![
            regional_row("West Coast", "485000", 24),
            regional_row("East Coast", "392000", 18),
            regional_row("Midwest", "328000", 15),
        ];
        // (485000 + 392000 + 328000) * 1.18
        assert_eq!(recompute_total_sales(&rows), "1421900.00");
    }

    #[test]
    fn total_sales_ignores_unparseable_revenue() {
        let rows = vec![
            regional_row("West Coast", "1000", 1),
            regional_row("East Coast", "garbage", 1),
        ];
        assert_eq!(recompute_total_sales(&rows), "1180.00");
    }

    #[test]
    fn total_sales_of_nothing_is_zero() {
        assert_eq!(recompute_total_sales(&[]), "0.00");
    }

    #[test]
    fn store_metrics_applies_active_ratio() {
        let rows = vec![
            regional_row("West Coast", "0", 24),
            regional_row("East Coast", "0", 18),
        ];
        let metrics = store_metrics(&rows);
        assert_eq!(metrics.total_stores, 42);
        assert_eq!(metrics.active_stores, 39); // floor(42 * 0.95)
        assert_eq!(metrics.inactive_stores, 3);
        assert_eq!(metrics.regions, 2);
    }

    #[test]
    fn regional_performance_unmatched_region_is_zero_stores() {
        let regional = vec![
            regional_row("West Coast", "485000", 24),
            regional_row("Nowhere", "100", 5),
        ];
        let stores = vec![Store {
            id: 1,
            name: "West Coast Region".to_string(),
            region: "West Coast".to_string(),
            address: None,
            status: "active".to_string(),
            store_count: 45,
        }];

        let rows = regional_performance(&regional, &stores);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].store_count, 45);
        assert_eq!(rows[1].store_count, 0);
    }
}
