//! In-memory storage behavior tests. The same contracts hold for the
//! sqlite backend; these exercise the shared semantics without a database.

use chrono::{TimeZone, Timelike, Utc};

use backend::shared::error::AppError;
use backend::storage::{MemStorage, Storage};
use contracts::domain::field_config::InsertDataFieldConfig;
use contracts::domain::incident::{IncidentPatch, InsertIncident};
use contracts::domain::inventory::{InsertInventory, InventoryPatch};
use contracts::domain::product::InsertProduct;
use contracts::domain::reporting::InsertRegionalSalesData;
use contracts::domain::sales_metrics::InsertSalesMetrics;
use contracts::domain::store::InsertStore;
use contracts::domain::war_room::InsertIncidentResolutionPath;

fn product(sku: &str) -> InsertProduct {
    InsertProduct {
        name: "PowerMax Foam".to_string(),
        category: "mattress".to_string(),
        size: Some("Queen".to_string()),
        price: "899.99".to_string(),
        sku: sku.to_string(),
        description: None,
    }
}

fn store(name: &str, region: &str) -> InsertStore {
    InsertStore {
        name: name.to_string(),
        region: region.to_string(),
        address: None,
        status: "active".to_string(),
        store_count: 10,
    }
}

fn incident(incident_id: &str) -> InsertIncident {
    InsertIncident {
        incident_id: incident_id.to_string(),
        title: "Payment Gateway Timeout".to_string(),
        description: "Checkout requests time out intermittently".to_string(),
        severity: "critical".to_string(),
        status: "open".to_string(),
        assigned_team: Some("Payments".to_string()),
        impact: None,
        eta_minutes: Some(15),
        escalation_level: 1,
        users_affected: None,
        revenue_at_risk: None,
        current_action: None,
        action_eta_minutes: None,
        action_owner: None,
        war_room_active: false,
        war_room_participants: 0,
    }
}

fn metrics(hour: u32, total: &str) -> InsertSalesMetrics {
    InsertSalesMetrics {
        event_id: Some(1),
        timestamp: Utc.with_ymd_and_hms(2024, 11, 29, hour, 0, 0).unwrap(),
        total_sales: total.to_string(),
        active_customers: 1000,
        avg_basket_size: "425.50".to_string(),
        conversion_rate: "3.2".to_string(),
        inventory_health: "92".to_string(),
    }
}

fn regional(region: &str, revenue: &str) -> InsertRegionalSalesData {
    InsertRegionalSalesData {
        event_id: Some(1),
        region: region.to_string(),
        store_count: 10,
        revenue: revenue.to_string(),
        growth_rate: "5.0".to_string(),
        performance_vs_target: "102.0".to_string(),
    }
}

#[tokio::test]
async fn latest_metrics_total_is_recomputed_from_regional_revenue() {
    let storage = MemStorage::new();
    storage
        .create_regional_sales(regional("West Coast", "485000.00"))
        .await
        .unwrap();
    storage
        .create_regional_sales(regional("East Coast", "392000.00"))
        .await
        .unwrap();
    storage
        .create_regional_sales(regional("Midwest", "328000.00"))
        .await
        .unwrap();

    // Stored total is a decoy; only the regional sum should be served.
    storage
        .create_sales_metrics(metrics(8, "1.00"))
        .await
        .unwrap();
    storage
        .create_sales_metrics(metrics(12, "2.00"))
        .await
        .unwrap();

    let latest = storage.latest_sales_metrics().await.unwrap().unwrap();
    assert_eq!(latest.timestamp.hour(), 12);
    assert_eq!(latest.total_sales, "1421900.00");
}

#[tokio::test]
async fn latest_metrics_is_none_when_empty() {
    let storage = MemStorage::new();
    assert!(storage.latest_sales_metrics().await.unwrap().is_none());
}

#[tokio::test]
async fn unreadable_regional_revenue_counts_as_zero() {
    let storage = MemStorage::new();
    storage
        .create_regional_sales(regional("West Coast", "1000.00"))
        .await
        .unwrap();
    storage
        .create_regional_sales(regional("East Coast", "not-a-number"))
        .await
        .unwrap();
    storage
        .create_sales_metrics(metrics(9, "0.00"))
        .await
        .unwrap();

    let latest = storage.latest_sales_metrics().await.unwrap().unwrap();
    assert_eq!(latest.total_sales, "1180.00");
}

#[tokio::test]
async fn duplicate_sku_is_rejected() {
    let storage = MemStorage::new();
    storage.create_product(product("PMF-001")).await.unwrap();
    let err = storage.create_product(product("PMF-001")).await.unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));
}

#[tokio::test]
async fn low_stock_is_at_or_below_threshold() {
    let storage = MemStorage::new();
    let s = storage.create_store(store("West Hub", "West Coast")).await.unwrap();

    for (stock, threshold) in [(5, 20), (20, 20), (21, 20)] {
        storage
            .create_inventory(InsertInventory {
                product_id: None,
                store_id: s.id,
                region: "West Coast".to_string(),
                current_stock: stock,
                min_threshold: threshold,
            })
            .await
            .unwrap();
    }

    let low = storage.low_stock_inventory().await.unwrap();
    assert_eq!(low.len(), 2);
    assert!(low.iter().all(|v| v.record.current_stock <= v.record.min_threshold));
}

#[tokio::test]
async fn inventory_view_tolerates_dangling_product_reference() {
    let storage = MemStorage::new();
    let s = storage.create_store(store("East Hub", "East Coast")).await.unwrap();
    storage
        .create_inventory(InsertInventory {
            product_id: Some(9999),
            store_id: s.id,
            region: "East Coast".to_string(),
            current_stock: 50,
            min_threshold: 20,
        })
        .await
        .unwrap();

    let all = storage.inventory().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].product.is_none());
    assert_eq!(all[0].store.as_ref().map(|s| s.id), Some(s.id));
}

#[tokio::test]
async fn inventory_update_stamps_last_updated() {
    let storage = MemStorage::new();
    let s = storage.create_store(store("Mid Hub", "Midwest")).await.unwrap();
    let rec = storage
        .create_inventory(InsertInventory {
            product_id: None,
            store_id: s.id,
            region: "Midwest".to_string(),
            current_stock: 40,
            min_threshold: 20,
        })
        .await
        .unwrap();

    let updated = storage
        .update_inventory(
            rec.id,
            InventoryPatch {
                current_stock: Some(12),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.current_stock, 12);
    assert_eq!(updated.min_threshold, 20);
    assert!(updated.last_updated.is_some());
}

#[tokio::test]
async fn update_of_missing_inventory_is_not_found() {
    let storage = MemStorage::new();
    let err = storage
        .update_inventory(42, InventoryPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Inventory record not found"));
}

#[tokio::test]
async fn active_incidents_excludes_resolved_and_closed() {
    let storage = MemStorage::new();
    let a = storage.create_incident(incident("INC-2025-001")).await.unwrap();
    let b = storage.create_incident(incident("INC-2025-002")).await.unwrap();
    let c = storage.create_incident(incident("INC-2025-003")).await.unwrap();

    storage
        .update_incident(
            b.id,
            IncidentPatch {
                status: Some("resolved".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    storage
        .update_incident(
            c.id,
            IncidentPatch {
                status: Some("closed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let active = storage.active_incidents().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, a.id);
}

#[tokio::test]
async fn resolving_stamps_resolved_at_and_reopening_keeps_it() {
    let storage = MemStorage::new();
    let inc = storage.create_incident(incident("INC-2025-010")).await.unwrap();
    assert!(inc.resolved_at.is_none());

    let resolved = storage
        .update_incident(
            inc.id,
            IncidentPatch {
                status: Some("resolved".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let stamp = resolved.resolved_at;
    assert!(stamp.is_some());

    let reopened = storage
        .update_incident(
            inc.id,
            IncidentPatch {
                status: Some("investigating".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(reopened.resolved_at, stamp);
}

#[tokio::test]
async fn escalate_touches_only_the_escalation_level() {
    let storage = MemStorage::new();
    let inc = storage.create_incident(incident("INC-2025-020")).await.unwrap();

    let escalated = storage.escalate_incident(inc.id, 3).await.unwrap();
    assert_eq!(escalated.escalation_level, 3);
    assert_eq!(escalated.status, inc.status);
    assert_eq!(escalated.title, inc.title);

    let err = storage.escalate_incident(9999, 2).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Incident not found"));
}

#[tokio::test]
async fn duplicate_incident_tracker_id_is_rejected() {
    let storage = MemStorage::new();
    storage.create_incident(incident("INC-2025-030")).await.unwrap();
    let err = storage
        .create_incident(incident("INC-2025-030"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));
}

#[tokio::test]
async fn resolution_paths_come_back_in_priority_order() {
    let storage = MemStorage::new();
    let inc = storage.create_incident(incident("INC-2025-040")).await.unwrap();

    for (name, priority) in [("Nuclear", 3), ("Primary", 1), ("Fallback", 2)] {
        storage
            .create_incident_resolution_path(InsertIncidentResolutionPath {
                incident_id: Some(inc.id),
                path_name: name.to_string(),
                path_type: "current".to_string(),
                description: "strategy".to_string(),
                success_rate: 80,
                time_estimate: None,
                tradeoffs: None,
                priority,
            })
            .await
            .unwrap();
    }

    let paths = storage.incident_resolution_paths(inc.id).await.unwrap();
    let names: Vec<_> = paths.iter().map(|p| p.path_name.as_str()).collect();
    assert_eq!(names, ["Primary", "Fallback", "Nuclear"]);
}

#[tokio::test]
async fn field_config_delete_is_idempotent() {
    let storage = MemStorage::new();
    let cfg = storage
        .create_data_field_config(InsertDataFieldConfig {
            event_id: Some(1),
            bundle_id: "sales".to_string(),
            data_source: "pos".to_string(),
            field_name: "revenue".to_string(),
            update_frequency: "realtime".to_string(),
            retention_days: 7,
            is_active: true,
        })
        .await
        .unwrap();

    storage.delete_data_field_config(cfg.id).await.unwrap();
    // Second delete of the same id is still a success.
    storage.delete_data_field_config(cfg.id).await.unwrap();
    assert!(storage.data_field_configs(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn stores_filter_by_region() {
    let storage = MemStorage::new();
    storage.create_store(store("West Hub", "West Coast")).await.unwrap();
    storage.create_store(store("West Annex", "West Coast")).await.unwrap();
    storage.create_store(store("East Hub", "East Coast")).await.unwrap();

    let west = storage.stores_by_region("West Coast").await.unwrap();
    assert_eq!(west.len(), 2);
    assert!(west.iter().all(|s| s.region == "West Coast"));
    assert!(storage.stores_by_region("Alaska").await.unwrap().is_empty());
}
