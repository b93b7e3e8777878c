//! Durable backend over SQLite. Thin delegation to the per-entity
//! repositories in [`crate::domain`]; derived reads are assembled here so
//! both backends share the same aggregation code.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

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

use crate::domain;
use crate::shared::aggregation;
use crate::shared::error::AppError;

use super::{Result, Storage};

pub struct SqliteStorage {
    conn: DatabaseConnection,
}

impl SqliteStorage {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Stitches inventory rows with their product and store records.
    /// Dangling references resolve to `None`, never an error.
    async fn stitch(&self, records: Vec<InventoryRecord>) -> Result<Vec<InventoryView>> {
        let products: HashMap<i32, Product> = domain::product::list(&self.conn)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        let stores: HashMap<i32, Store> = domain::store::list(&self.conn)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        Ok(records
            .into_iter()
            .map(|record| {
                let product = record.product_id.and_then(|id| products.get(&id).cloned());
                let store = stores.get(&record.store_id).cloned();
                InventoryView {
                    record,
                    product,
                    store,
                }
            })
            .collect())
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn sales_events(&self) -> Result<Vec<SalesEvent>> {
        Ok(domain::sales_event::list(&self.conn).await?)
    }

    async fn sales_event(&self, id: i32) -> Result<Option<SalesEvent>> {
        Ok(domain::sales_event::get(&self.conn, id).await?)
    }

    async fn create_sales_event(&self, event: InsertSalesEvent) -> Result<SalesEvent> {
        Ok(domain::sales_event::insert(&self.conn, event).await?)
    }

    async fn update_sales_event(&self, id: i32, patch: SalesEventPatch) -> Result<SalesEvent> {
        domain::sales_event::update(&self.conn, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    async fn sales_metrics(&self, event_id: Option<i32>) -> Result<Vec<SalesMetrics>> {
        Ok(domain::sales_metrics::list(&self.conn, event_id).await?)
    }

    async fn create_sales_metrics(&self, metrics: InsertSalesMetrics) -> Result<SalesMetrics> {
        Ok(domain::sales_metrics::insert(&self.conn, metrics).await?)
    }

    async fn latest_sales_metrics(&self) -> Result<Option<SalesMetrics>> {
        let Some(mut snapshot) = domain::sales_metrics::latest(&self.conn).await? else {
            return Ok(None);
        };
        let regional = domain::reporting::regional_sales::list(&self.conn, None).await?;
        snapshot.total_sales = aggregation::recompute_total_sales(&regional);
        Ok(Some(snapshot))
    }

    async fn products(&self) -> Result<Vec<Product>> {
        Ok(domain::product::list(&self.conn).await?)
    }

    async fn product(&self, id: i32) -> Result<Option<Product>> {
        Ok(domain::product::get(&self.conn, id).await?)
    }

    async fn create_product(&self, product: InsertProduct) -> Result<Product> {
        Ok(domain::product::insert(&self.conn, product).await?)
    }

    async fn inventory(&self) -> Result<Vec<InventoryView>> {
        let records = domain::inventory::list(&self.conn).await?;
        self.stitch(records).await
    }

    async fn inventory_by_region(&self, region: &str) -> Result<Vec<InventoryView>> {
        let records = domain::inventory::list_by_region(&self.conn, region).await?;
        self.stitch(records).await
    }

    async fn low_stock_inventory(&self) -> Result<Vec<InventoryView>> {
        let records = domain::inventory::list_low_stock(&self.conn).await?;
        self.stitch(records).await
    }

    async fn create_inventory(&self, record: InsertInventory) -> Result<InventoryRecord> {
        Ok(domain::inventory::insert(&self.conn, record).await?)
    }

    async fn update_inventory(&self, id: i32, patch: InventoryPatch) -> Result<InventoryRecord> {
        domain::inventory::update(&self.conn, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Inventory record not found".to_string()))
    }

    async fn stores(&self) -> Result<Vec<Store>> {
        Ok(domain::store::list(&self.conn).await?)
    }

    async fn store(&self, id: i32) -> Result<Option<Store>> {
        Ok(domain::store::get(&self.conn, id).await?)
    }

    async fn stores_by_region(&self, region: &str) -> Result<Vec<Store>> {
        Ok(domain::store::list_by_region(&self.conn, region).await?)
    }

    async fn create_store(&self, store: InsertStore) -> Result<Store> {
        Ok(domain::store::insert(&self.conn, store).await?)
    }

    async fn incidents(&self) -> Result<Vec<Incident>> {
        Ok(domain::incident::list(&self.conn).await?)
    }

    async fn active_incidents(&self) -> Result<Vec<Incident>> {
        Ok(domain::incident::list_active(&self.conn).await?)
    }

    async fn create_incident(&self, incident: InsertIncident) -> Result<Incident> {
        Ok(domain::incident::insert(&self.conn, incident).await?)
    }

    async fn update_incident(&self, id: i32, patch: IncidentPatch) -> Result<Incident> {
        domain::incident::update(&self.conn, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Incident not found".to_string()))
    }

    async fn war_room_participants(&self, incident_id: i32) -> Result<Vec<WarRoomParticipant>> {
        Ok(domain::war_room_participant::list_by_incident(&self.conn, incident_id).await?)
    }

    async fn create_war_room_participant(
        &self,
        participant: InsertWarRoomParticipant,
    ) -> Result<WarRoomParticipant> {
        Ok(domain::war_room_participant::insert(&self.conn, participant).await?)
    }

    async fn incident_resolution_paths(
        &self,
        incident_id: i32,
    ) -> Result<Vec<IncidentResolutionPath>> {
        Ok(domain::resolution_path::list_by_incident(&self.conn, incident_id).await?)
    }

    async fn create_incident_resolution_path(
        &self,
        path: InsertIncidentResolutionPath,
    ) -> Result<IncidentResolutionPath> {
        Ok(domain::resolution_path::insert(&self.conn, path).await?)
    }

    async fn system_components(&self) -> Result<Vec<SystemComponent>> {
        Ok(domain::system_component::list(&self.conn).await?)
    }

    async fn create_system_component(
        &self,
        component: InsertSystemComponent,
    ) -> Result<SystemComponent> {
        Ok(domain::system_component::insert(&self.conn, component).await?)
    }

    async fn update_system_component(
        &self,
        id: i32,
        update: SystemComponentUpdate,
    ) -> Result<SystemComponent> {
        domain::system_component::update(&self.conn, id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Component not found".to_string()))
    }

    async fn data_field_configs(&self, event_id: Option<i32>) -> Result<Vec<DataFieldConfig>> {
        Ok(domain::field_config::list(&self.conn, event_id).await?)
    }

    async fn create_data_field_config(
        &self,
        config: InsertDataFieldConfig,
    ) -> Result<DataFieldConfig> {
        Ok(domain::field_config::insert(&self.conn, config).await?)
    }

    async fn update_data_field_config(
        &self,
        id: i32,
        patch: DataFieldConfigPatch,
    ) -> Result<DataFieldConfig> {
        domain::field_config::update(&self.conn, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Field configuration not found".to_string()))
    }

    async fn delete_data_field_config(&self, id: i32) -> Result<()> {
        Ok(domain::field_config::delete(&self.conn, id).await?)
    }

    async fn signal_dependencies(&self, event_id: Option<i32>) -> Result<Vec<SignalDependency>> {
        Ok(domain::signal_dependency::list(&self.conn, event_id).await?)
    }

    async fn create_signal_dependency(
        &self,
        dependency: InsertSignalDependency,
    ) -> Result<SignalDependency> {
        Ok(domain::signal_dependency::insert(&self.conn, dependency).await?)
    }

    async fn delete_signal_dependency(&self, id: i32) -> Result<()> {
        Ok(domain::signal_dependency::delete(&self.conn, id).await?)
    }

    async fn hourly_sales(&self, event_id: Option<i32>) -> Result<Vec<HourlySalesData>> {
        Ok(domain::reporting::hourly_sales::list(&self.conn, event_id).await?)
    }

    async fn create_hourly_sales(&self, data: InsertHourlySalesData) -> Result<HourlySalesData> {
        Ok(domain::reporting::hourly_sales::insert(&self.conn, data).await?)
    }

    async fn product_performance(&self, event_id: Option<i32>) -> Result<Vec<ProductPerformance>> {
        Ok(domain::reporting::product_performance::list(&self.conn, event_id).await?)
    }

    async fn create_product_performance(
        &self,
        data: InsertProductPerformance,
    ) -> Result<ProductPerformance> {
        Ok(domain::reporting::product_performance::insert(&self.conn, data).await?)
    }

    async fn regional_sales(&self, event_id: Option<i32>) -> Result<Vec<RegionalSalesData>> {
        Ok(domain::reporting::regional_sales::list(&self.conn, event_id).await?)
    }

    async fn create_regional_sales(
        &self,
        data: InsertRegionalSalesData,
    ) -> Result<RegionalSalesData> {
        Ok(domain::reporting::regional_sales::insert(&self.conn, data).await?)
    }

    async fn customer_behavior(
        &self,
        event_id: Option<i32>,
    ) -> Result<Vec<CustomerBehaviorMetrics>> {
        Ok(domain::reporting::customer_behavior::list(&self.conn, event_id).await?)
    }

    async fn latest_customer_behavior(&self) -> Result<Option<CustomerBehaviorMetrics>> {
        Ok(domain::reporting::customer_behavior::latest(&self.conn).await?)
    }

    async fn create_customer_behavior(
        &self,
        metrics: InsertCustomerBehaviorMetrics,
    ) -> Result<CustomerBehaviorMetrics> {
        Ok(domain::reporting::customer_behavior::insert(&self.conn, metrics).await?)
    }

    async fn social_mentions(&self, event_id: Option<i32>) -> Result<Vec<SocialMention>> {
        Ok(domain::reporting::social_mention::list(&self.conn, event_id).await?)
    }

    async fn create_social_mention(&self, mention: InsertSocialMention) -> Result<SocialMention> {
        Ok(domain::reporting::social_mention::insert(&self.conn, mention).await?)
    }

    async fn market_trends(&self, event_id: Option<i32>) -> Result<Vec<MarketTrend>> {
        Ok(domain::reporting::market_trend::list(&self.conn, event_id).await?)
    }

    async fn create_market_trend(&self, trend: InsertMarketTrend) -> Result<MarketTrend> {
        Ok(domain::reporting::market_trend::insert(&self.conn, trend).await?)
    }

    async fn top_performers(&self, event_id: Option<i32>) -> Result<Vec<TopPerformer>> {
        Ok(domain::reporting::top_performer::list(&self.conn, event_id).await?)
    }

    async fn create_top_performer(&self, performer: InsertTopPerformer) -> Result<TopPerformer> {
        Ok(domain::reporting::top_performer::insert(&self.conn, performer).await?)
    }

    async fn ai_insights(&self, event_id: Option<i32>) -> Result<Vec<AiInsight>> {
        Ok(domain::reporting::ai_insight::list(&self.conn, event_id).await?)
    }

    async fn create_ai_insight(&self, insight: InsertAiInsight) -> Result<AiInsight> {
        Ok(domain::reporting::ai_insight::insert(&self.conn, insight).await?)
    }

    async fn inventory_alerts(&self) -> Result<Vec<InventoryAlert>> {
        Ok(domain::reporting::inventory_alert::list(&self.conn).await?)
    }

    async fn create_inventory_alert(&self, alert: InsertInventoryAlert) -> Result<InventoryAlert> {
        Ok(domain::reporting::inventory_alert::insert(&self.conn, alert).await?)
    }
}
