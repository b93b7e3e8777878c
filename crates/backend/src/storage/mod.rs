//! The aggregation service: single owner of persisted state.
//!
//! Two interchangeable backends implement [`Storage`]: an in-memory
//! map-backed store and a SQLite-backed store. The backend is selected once
//! at process startup and injected into the router as shared state; the two
//! are never mixed at runtime.

use std::sync::Arc;

use async_trait::async_trait;

use contracts::domain::field_config::{
    DataFieldConfig, DataFieldConfigPatch, InsertDataFieldConfig,
};
use contracts::domain::incident::{Incident, IncidentPatch, InsertIncident};
use contracts::domain::inventory::{
    InsertInventory, InventoryPatch, InventoryRecord, InventoryView,
};
use contracts::domain::product::{InsertProduct, Product};
use contracts::domain::reporting::{
    AiInsight, CustomerBehaviorMetrics, HourlySalesData, InsertAiInsight,
    InsertCustomerBehaviorMetrics, InsertHourlySalesData, InsertInventoryAlert,
    InsertMarketTrend, InsertProductPerformance, InsertRegionalSalesData, InsertSocialMention,
    InsertTopPerformer, InventoryAlert, MarketTrend, ProductPerformance, RegionalSalesData,
    SocialMention, TopPerformer,
};
use contracts::domain::sales_event::{InsertSalesEvent, SalesEvent, SalesEventPatch};
use contracts::domain::sales_metrics::{InsertSalesMetrics, SalesMetrics};
use contracts::domain::signal_dependency::{InsertSignalDependency, SignalDependency};
use contracts::domain::store::{InsertStore, Store};
use contracts::domain::system_component::{
    InsertSystemComponent, SystemComponent, SystemComponentUpdate,
};
use contracts::domain::war_room::{
    IncidentResolutionPath, InsertIncidentResolutionPath, InsertWarRoomParticipant,
    WarRoomParticipant,
};

use crate::shared::error::AppError;

pub mod memory;
pub mod sqlite;

pub use memory::MemStorage;
pub use sqlite::SqliteStorage;

pub type Result<T> = std::result::Result<T, AppError>;

/// Shared handle to the selected backend.
pub type DynStorage = Arc<dyn Storage>;

/// One read/write method pair per entity, plus the derived reads. Every call
/// is independent and at-most-once; failures surface as [`AppError`] with no
/// retry.
#[async_trait]
pub trait Storage: Send + Sync {
    // Sales events
    async fn sales_events(&self) -> Result<Vec<SalesEvent>>;
    async fn sales_event(&self, id: i32) -> Result<Option<SalesEvent>>;
    async fn create_sales_event(&self, event: InsertSalesEvent) -> Result<SalesEvent>;
    async fn update_sales_event(&self, id: i32, patch: SalesEventPatch) -> Result<SalesEvent>;

    // Sales metrics
    async fn sales_metrics(&self, event_id: Option<i32>) -> Result<Vec<SalesMetrics>>;
    async fn create_sales_metrics(&self, metrics: InsertSalesMetrics) -> Result<SalesMetrics>;
    /// Snapshot with the maximum timestamp, with `total_sales` recomputed
    /// from regional revenue. The stored total is never served here.
    async fn latest_sales_metrics(&self) -> Result<Option<SalesMetrics>>;

    // Products
    async fn products(&self) -> Result<Vec<Product>>;
    async fn product(&self, id: i32) -> Result<Option<Product>>;
    async fn create_product(&self, product: InsertProduct) -> Result<Product>;

    // Inventory
    async fn inventory(&self) -> Result<Vec<InventoryView>>;
    async fn inventory_by_region(&self, region: &str) -> Result<Vec<InventoryView>>;
    /// Items at or below their own `min_threshold`.
    async fn low_stock_inventory(&self) -> Result<Vec<InventoryView>>;
    async fn create_inventory(&self, record: InsertInventory) -> Result<InventoryRecord>;
    async fn update_inventory(&self, id: i32, patch: InventoryPatch) -> Result<InventoryRecord>;

    // Stores
    async fn stores(&self) -> Result<Vec<Store>>;
    async fn store(&self, id: i32) -> Result<Option<Store>>;
    async fn stores_by_region(&self, region: &str) -> Result<Vec<Store>>;
    async fn create_store(&self, store: InsertStore) -> Result<Store>;

    // Incidents
    async fn incidents(&self) -> Result<Vec<Incident>>;
    /// Incidents whose status is neither resolved nor closed.
    async fn active_incidents(&self) -> Result<Vec<Incident>>;
    async fn create_incident(&self, incident: InsertIncident) -> Result<Incident>;
    async fn update_incident(&self, id: i32, patch: IncidentPatch) -> Result<Incident>;

    /// Manual escalation-level set. Escalation policy stays with the caller;
    /// nothing here derives a level from severity or age.
    async fn escalate_incident(&self, id: i32, level: i32) -> Result<Incident> {
        self.update_incident(
            id,
            IncidentPatch {
                escalation_level: Some(level),
                ..Default::default()
            },
        )
        .await
    }

    // War room
    async fn war_room_participants(&self, incident_id: i32) -> Result<Vec<WarRoomParticipant>>;
    async fn create_war_room_participant(
        &self,
        participant: InsertWarRoomParticipant,
    ) -> Result<WarRoomParticipant>;
    /// Ordered by priority ascending, regardless of insertion order.
    async fn incident_resolution_paths(
        &self,
        incident_id: i32,
    ) -> Result<Vec<IncidentResolutionPath>>;
    async fn create_incident_resolution_path(
        &self,
        path: InsertIncidentResolutionPath,
    ) -> Result<IncidentResolutionPath>;

    // System components
    async fn system_components(&self) -> Result<Vec<SystemComponent>>;
    async fn create_system_component(
        &self,
        component: InsertSystemComponent,
    ) -> Result<SystemComponent>;
    async fn update_system_component(
        &self,
        id: i32,
        update: SystemComponentUpdate,
    ) -> Result<SystemComponent>;

    // Data field configurations
    async fn data_field_configs(&self, event_id: Option<i32>) -> Result<Vec<DataFieldConfig>>;
    async fn create_data_field_config(
        &self,
        config: InsertDataFieldConfig,
    ) -> Result<DataFieldConfig>;
    async fn update_data_field_config(
        &self,
        id: i32,
        patch: DataFieldConfigPatch,
    ) -> Result<DataFieldConfig>;
    /// Idempotent: acknowledges whether or not the row existed.
    async fn delete_data_field_config(&self, id: i32) -> Result<()>;

    // Signal dependencies
    async fn signal_dependencies(&self, event_id: Option<i32>) -> Result<Vec<SignalDependency>>;
    async fn create_signal_dependency(
        &self,
        dependency: InsertSignalDependency,
    ) -> Result<SignalDependency>;
    /// Idempotent, like field-config delete.
    async fn delete_signal_dependency(&self, id: i32) -> Result<()>;

    // Reporting tables
    async fn hourly_sales(&self, event_id: Option<i32>) -> Result<Vec<HourlySalesData>>;
    async fn create_hourly_sales(&self, data: InsertHourlySalesData) -> Result<HourlySalesData>;
    async fn product_performance(&self, event_id: Option<i32>) -> Result<Vec<ProductPerformance>>;
    async fn create_product_performance(
        &self,
        data: InsertProductPerformance,
    ) -> Result<ProductPerformance>;
    async fn regional_sales(&self, event_id: Option<i32>) -> Result<Vec<RegionalSalesData>>;
    async fn create_regional_sales(
        &self,
        data: InsertRegionalSalesData,
    ) -> Result<RegionalSalesData>;
    async fn customer_behavior(
        &self,
        event_id: Option<i32>,
    ) -> Result<Vec<CustomerBehaviorMetrics>>;
    async fn latest_customer_behavior(&self) -> Result<Option<CustomerBehaviorMetrics>>;
    async fn create_customer_behavior(
        &self,
        metrics: InsertCustomerBehaviorMetrics,
    ) -> Result<CustomerBehaviorMetrics>;
    async fn social_mentions(&self, event_id: Option<i32>) -> Result<Vec<SocialMention>>;
    async fn create_social_mention(&self, mention: InsertSocialMention) -> Result<SocialMention>;
    async fn market_trends(&self, event_id: Option<i32>) -> Result<Vec<MarketTrend>>;
    async fn create_market_trend(&self, trend: InsertMarketTrend) -> Result<MarketTrend>;
    async fn top_performers(&self, event_id: Option<i32>) -> Result<Vec<TopPerformer>>;
    async fn create_top_performer(&self, performer: InsertTopPerformer) -> Result<TopPerformer>;
    async fn ai_insights(&self, event_id: Option<i32>) -> Result<Vec<AiInsight>>;
    async fn create_ai_insight(&self, insight: InsertAiInsight) -> Result<AiInsight>;
    async fn inventory_alerts(&self) -> Result<Vec<InventoryAlert>>;
    async fn create_inventory_alert(&self, alert: InsertInventoryAlert) -> Result<InventoryAlert>;
}
