//! Map-backed storage. Holds everything behind one RwLock; useful for
//! development and tests, state is lost on shutdown.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

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

use crate::shared::aggregation;
use crate::shared::error::AppError;

use super::{Result, Storage};

#[derive(Default)]
struct MemState {
    next_id: i32,
    sales_events: BTreeMap<i32, SalesEvent>,
    sales_metrics: BTreeMap<i32, SalesMetrics>,
    products: BTreeMap<i32, Product>,
    inventory: BTreeMap<i32, InventoryRecord>,
    stores: BTreeMap<i32, Store>,
    incidents: BTreeMap<i32, Incident>,
    participants: BTreeMap<i32, WarRoomParticipant>,
    resolution_paths: BTreeMap<i32, IncidentResolutionPath>,
    components: BTreeMap<i32, SystemComponent>,
    field_configs: BTreeMap<i32, DataFieldConfig>,
    signal_dependencies: BTreeMap<i32, SignalDependency>,
    hourly_sales: BTreeMap<i32, HourlySalesData>,
    product_performance: BTreeMap<i32, ProductPerformance>,
    regional_sales: BTreeMap<i32, RegionalSalesData>,
    customer_behavior: BTreeMap<i32, CustomerBehaviorMetrics>,
    social_mentions: BTreeMap<i32, SocialMention>,
    market_trends: BTreeMap<i32, MarketTrend>,
    top_performers: BTreeMap<i32, TopPerformer>,
    ai_insights: BTreeMap<i32, AiInsight>,
    inventory_alerts: BTreeMap<i32, InventoryAlert>,
}

impl MemState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn inventory_view(&self, record: &InventoryRecord) -> InventoryView {
        InventoryView {
            record: record.clone(),
            product: record
                .product_id
                .and_then(|id| self.products.get(&id).cloned()),
            store: self.stores.get(&record.store_id).cloned(),
        }
    }
}

pub struct MemStorage {
    state: RwLock<MemState>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemState::default()),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn sales_events(&self) -> Result<Vec<SalesEvent>> {
        let state = self.state.read().await;
        Ok(state.sales_events.values().cloned().collect())
    }

    async fn sales_event(&self, id: i32) -> Result<Option<SalesEvent>> {
        let state = self.state.read().await;
        Ok(state.sales_events.get(&id).cloned())
    }

    async fn create_sales_event(&self, event: InsertSalesEvent) -> Result<SalesEvent> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = SalesEvent {
            id,
            name: event.name,
            start_date: event.start_date,
            end_date: event.end_date,
            target_revenue: event.target_revenue,
            status: event.status,
            signal_config: event.signal_config,
            created_at: Some(Utc::now()),
        };
        state.sales_events.insert(id, record.clone());
        Ok(record)
    }

    async fn update_sales_event(&self, id: i32, patch: SalesEventPatch) -> Result<SalesEvent> {
        let mut state = self.state.write().await;
        let record = state
            .sales_events
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        record.apply(&patch);
        Ok(record.clone())
    }

    async fn sales_metrics(&self, event_id: Option<i32>) -> Result<Vec<SalesMetrics>> {
        let state = self.state.read().await;
        Ok(state
            .sales_metrics
            .values()
            .filter(|m| event_id.is_none() || m.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_sales_metrics(&self, metrics: InsertSalesMetrics) -> Result<SalesMetrics> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = SalesMetrics {
            id,
            event_id: metrics.event_id,
            timestamp: metrics.timestamp,
            total_sales: metrics.total_sales,
            active_customers: metrics.active_customers,
            avg_basket_size: metrics.avg_basket_size,
            conversion_rate: metrics.conversion_rate,
            inventory_health: metrics.inventory_health,
        };
        state.sales_metrics.insert(id, record.clone());
        Ok(record)
    }

    async fn latest_sales_metrics(&self) -> Result<Option<SalesMetrics>> {
        let state = self.state.read().await;
        let latest = state
            .sales_metrics
            .values()
            .max_by_key(|m| m.timestamp)
            .cloned();
        Ok(latest.map(|mut snapshot| {
            let regional: Vec<RegionalSalesData> =
                state.regional_sales.values().cloned().collect();
            snapshot.total_sales = aggregation::recompute_total_sales(&regional);
            snapshot
        }))
    }

    async fn products(&self) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn product(&self, id: i32) -> Result<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn create_product(&self, product: InsertProduct) -> Result<Product> {
        let mut state = self.state.write().await;
        if state.products.values().any(|p| p.sku == product.sku) {
            return Err(AppError::Storage(format!(
                "unique constraint violated: products.sku {}",
                product.sku
            )));
        }
        let id = state.next_id();
        let record = Product {
            id,
            name: product.name,
            category: product.category,
            size: product.size,
            price: product.price,
            sku: product.sku,
            description: product.description,
        };
        state.products.insert(id, record.clone());
        Ok(record)
    }

    async fn inventory(&self) -> Result<Vec<InventoryView>> {
        let state = self.state.read().await;
        Ok(state
            .inventory
            .values()
            .map(|r| state.inventory_view(r))
            .collect())
    }

    async fn inventory_by_region(&self, region: &str) -> Result<Vec<InventoryView>> {
        let state = self.state.read().await;
        Ok(state
            .inventory
            .values()
            .filter(|r| r.region == region)
            .map(|r| state.inventory_view(r))
            .collect())
    }

    async fn low_stock_inventory(&self) -> Result<Vec<InventoryView>> {
        let state = self.state.read().await;
        Ok(state
            .inventory
            .values()
            .filter(|r| r.is_low_stock())
            .map(|r| state.inventory_view(r))
            .collect())
    }

    async fn create_inventory(&self, record: InsertInventory) -> Result<InventoryRecord> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let row = InventoryRecord {
            id,
            product_id: record.product_id,
            store_id: record.store_id,
            region: record.region,
            current_stock: record.current_stock,
            min_threshold: record.min_threshold,
            last_updated: Some(Utc::now()),
        };
        state.inventory.insert(id, row.clone());
        Ok(row)
    }

    async fn update_inventory(&self, id: i32, patch: InventoryPatch) -> Result<InventoryRecord> {
        let mut state = self.state.write().await;
        let record = state
            .inventory
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Inventory record not found".to_string()))?;
        record.apply(&patch, Utc::now());
        Ok(record.clone())
    }

    async fn stores(&self) -> Result<Vec<Store>> {
        let state = self.state.read().await;
        Ok(state.stores.values().cloned().collect())
    }

    async fn store(&self, id: i32) -> Result<Option<Store>> {
        let state = self.state.read().await;
        Ok(state.stores.get(&id).cloned())
    }

    async fn stores_by_region(&self, region: &str) -> Result<Vec<Store>> {
        let state = self.state.read().await;
        Ok(state
            .stores
            .values()
            .filter(|s| s.region == region)
            .cloned()
            .collect())
    }

    async fn create_store(&self, store: InsertStore) -> Result<Store> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = Store {
            id,
            name: store.name,
            region: store.region,
            address: store.address,
            status: store.status,
            store_count: store.store_count,
        };
        state.stores.insert(id, record.clone());
        Ok(record)
    }

    async fn incidents(&self) -> Result<Vec<Incident>> {
        let state = self.state.read().await;
        Ok(state.incidents.values().cloned().collect())
    }

    async fn active_incidents(&self) -> Result<Vec<Incident>> {
        let state = self.state.read().await;
        Ok(state
            .incidents
            .values()
            .filter(|i| i.is_active())
            .cloned()
            .collect())
    }

    async fn create_incident(&self, incident: InsertIncident) -> Result<Incident> {
        let mut state = self.state.write().await;
        if state
            .incidents
            .values()
            .any(|i| i.incident_id == incident.incident_id)
        {
            return Err(AppError::Storage(format!(
                "unique constraint violated: incidents.incident_id {}",
                incident.incident_id
            )));
        }
        let id = state.next_id();
        let record = Incident {
            id,
            incident_id: incident.incident_id,
            title: incident.title,
            description: incident.description,
            severity: incident.severity,
            status: incident.status,
            assigned_team: incident.assigned_team,
            impact: incident.impact,
            eta_minutes: incident.eta_minutes,
            escalation_level: incident.escalation_level,
            users_affected: incident.users_affected,
            revenue_at_risk: incident.revenue_at_risk,
            current_action: incident.current_action,
            action_eta_minutes: incident.action_eta_minutes,
            action_owner: incident.action_owner,
            war_room_active: incident.war_room_active,
            war_room_participants: incident.war_room_participants,
            created_at: Some(Utc::now()),
            resolved_at: None,
        };
        state.incidents.insert(id, record.clone());
        Ok(record)
    }

    async fn update_incident(&self, id: i32, patch: IncidentPatch) -> Result<Incident> {
        let mut state = self.state.write().await;
        let record = state
            .incidents
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Incident not found".to_string()))?;
        record.apply(&patch, Utc::now());
        Ok(record.clone())
    }

    async fn war_room_participants(&self, incident_id: i32) -> Result<Vec<WarRoomParticipant>> {
        let state = self.state.read().await;
        Ok(state
            .participants
            .values()
            .filter(|p| p.incident_id == Some(incident_id))
            .cloned()
            .collect())
    }

    async fn create_war_room_participant(
        &self,
        participant: InsertWarRoomParticipant,
    ) -> Result<WarRoomParticipant> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = WarRoomParticipant {
            id,
            incident_id: participant.incident_id,
            participant_type: participant.participant_type,
            name: participant.name,
            role: participant.role,
            status: participant.status,
            description: participant.description,
            eta_minutes: participant.eta_minutes,
            badge_color: participant.badge_color,
            created_at: Some(Utc::now()),
        };
        state.participants.insert(id, record.clone());
        Ok(record)
    }

    async fn incident_resolution_paths(
        &self,
        incident_id: i32,
    ) -> Result<Vec<IncidentResolutionPath>> {
        let state = self.state.read().await;
        let mut paths: Vec<IncidentResolutionPath> = state
            .resolution_paths
            .values()
            .filter(|p| p.incident_id == Some(incident_id))
            .cloned()
            .collect();
        paths.sort_by_key(|p| (p.priority, p.id));
        Ok(paths)
    }

    async fn create_incident_resolution_path(
        &self,
        path: InsertIncidentResolutionPath,
    ) -> Result<IncidentResolutionPath> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = IncidentResolutionPath {
            id,
            incident_id: path.incident_id,
            path_name: path.path_name,
            path_type: path.path_type,
            description: path.description,
            success_rate: path.success_rate,
            time_estimate: path.time_estimate,
            tradeoffs: path.tradeoffs,
            priority: path.priority,
            created_at: Some(Utc::now()),
        };
        state.resolution_paths.insert(id, record.clone());
        Ok(record)
    }

    async fn system_components(&self) -> Result<Vec<SystemComponent>> {
        let state = self.state.read().await;
        Ok(state.components.values().cloned().collect())
    }

    async fn create_system_component(
        &self,
        component: InsertSystemComponent,
    ) -> Result<SystemComponent> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = SystemComponent {
            id,
            name: component.name,
            status: component.status,
            response_time_ms: component.response_time_ms,
            last_check: Some(Utc::now()),
        };
        state.components.insert(id, record.clone());
        Ok(record)
    }

    async fn update_system_component(
        &self,
        id: i32,
        update: SystemComponentUpdate,
    ) -> Result<SystemComponent> {
        let mut state = self.state.write().await;
        let record = state
            .components
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Component not found".to_string()))?;
        record.status = update.status;
        record.response_time_ms = update.response_time;
        record.last_check = Some(Utc::now());
        Ok(record.clone())
    }

    async fn data_field_configs(&self, event_id: Option<i32>) -> Result<Vec<DataFieldConfig>> {
        let state = self.state.read().await;
        Ok(state
            .field_configs
            .values()
            .filter(|c| event_id.is_none() || c.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_data_field_config(
        &self,
        config: InsertDataFieldConfig,
    ) -> Result<DataFieldConfig> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = DataFieldConfig {
            id,
            event_id: config.event_id,
            bundle_id: config.bundle_id,
            data_source: config.data_source,
            field_name: config.field_name,
            update_frequency: config.update_frequency,
            retention_days: config.retention_days,
            is_active: config.is_active,
            created_at: Some(Utc::now()),
        };
        state.field_configs.insert(id, record.clone());
        Ok(record)
    }

    async fn update_data_field_config(
        &self,
        id: i32,
        patch: DataFieldConfigPatch,
    ) -> Result<DataFieldConfig> {
        let mut state = self.state.write().await;
        let record = state
            .field_configs
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Field configuration not found".to_string()))?;
        record.apply(&patch);
        Ok(record.clone())
    }

    async fn delete_data_field_config(&self, id: i32) -> Result<()> {
        let mut state = self.state.write().await;
        state.field_configs.remove(&id);
        Ok(())
    }

    async fn signal_dependencies(&self, event_id: Option<i32>) -> Result<Vec<SignalDependency>> {
        let state = self.state.read().await;
        Ok(state
            .signal_dependencies
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_signal_dependency(
        &self,
        dependency: InsertSignalDependency,
    ) -> Result<SignalDependency> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = SignalDependency {
            id,
            event_id: dependency.event_id,
            source_bundle: dependency.source_bundle,
            source_field: dependency.source_field,
            target_bundle: dependency.target_bundle,
            target_field: dependency.target_field,
            dependency_type: dependency.dependency_type,
            weight: dependency.weight,
            created_at: Some(Utc::now()),
        };
        state.signal_dependencies.insert(id, record.clone());
        Ok(record)
    }

    async fn delete_signal_dependency(&self, id: i32) -> Result<()> {
        let mut state = self.state.write().await;
        state.signal_dependencies.remove(&id);
        Ok(())
    }

    async fn hourly_sales(&self, event_id: Option<i32>) -> Result<Vec<HourlySalesData>> {
        let state = self.state.read().await;
        let mut rows: Vec<HourlySalesData> = state
            .hourly_sales
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.hour.cmp(&b.hour)));
        Ok(rows)
    }

    async fn create_hourly_sales(&self, data: InsertHourlySalesData) -> Result<HourlySalesData> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = HourlySalesData {
            id,
            event_id: data.event_id,
            hour: data.hour,
            date: data.date,
            target_sales: data.target_sales,
            actual_sales: data.actual_sales,
            created_at: Some(Utc::now()),
        };
        state.hourly_sales.insert(id, record.clone());
        Ok(record)
    }

    async fn product_performance(&self, event_id: Option<i32>) -> Result<Vec<ProductPerformance>> {
        let state = self.state.read().await;
        let mut rows: Vec<ProductPerformance> = state
            .product_performance
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by_key(|d| d.ranking);
        Ok(rows)
    }

    async fn create_product_performance(
        &self,
        data: InsertProductPerformance,
    ) -> Result<ProductPerformance> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = ProductPerformance {
            id,
            product_id: data.product_id,
            event_id: data.event_id,
            revenue: data.revenue,
            units_sold: data.units_sold,
            ranking: data.ranking,
            growth_rate: data.growth_rate,
            last_updated: Some(Utc::now()),
        };
        state.product_performance.insert(id, record.clone());
        Ok(record)
    }

    async fn regional_sales(&self, event_id: Option<i32>) -> Result<Vec<RegionalSalesData>> {
        let state = self.state.read().await;
        Ok(state
            .regional_sales
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_regional_sales(
        &self,
        data: InsertRegionalSalesData,
    ) -> Result<RegionalSalesData> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = RegionalSalesData {
            id,
            event_id: data.event_id,
            region: data.region,
            store_count: data.store_count,
            revenue: data.revenue,
            growth_rate: data.growth_rate,
            performance_vs_target: data.performance_vs_target,
            last_updated: Some(Utc::now()),
        };
        state.regional_sales.insert(id, record.clone());
        Ok(record)
    }

    async fn customer_behavior(
        &self,
        event_id: Option<i32>,
    ) -> Result<Vec<CustomerBehaviorMetrics>> {
        let state = self.state.read().await;
        Ok(state
            .customer_behavior
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn latest_customer_behavior(&self) -> Result<Option<CustomerBehaviorMetrics>> {
        let state = self.state.read().await;
        Ok(state
            .customer_behavior
            .values()
            .max_by_key(|m| m.timestamp)
            .cloned())
    }

    async fn create_customer_behavior(
        &self,
        metrics: InsertCustomerBehaviorMetrics,
    ) -> Result<CustomerBehaviorMetrics> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = CustomerBehaviorMetrics {
            id,
            event_id: metrics.event_id,
            total_visitors: metrics.total_visitors,
            bounce_rate: metrics.bounce_rate,
            session_duration: metrics.session_duration,
            pages_per_session: metrics.pages_per_session,
            customer_satisfaction: metrics.customer_satisfaction,
            nps_score: metrics.nps_score,
            timestamp: Some(Utc::now()),
        };
        state.customer_behavior.insert(id, record.clone());
        Ok(record)
    }

    async fn social_mentions(&self, event_id: Option<i32>) -> Result<Vec<SocialMention>> {
        let state = self.state.read().await;
        Ok(state
            .social_mentions
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_social_mention(&self, mention: InsertSocialMention) -> Result<SocialMention> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = SocialMention {
            id,
            event_id: mention.event_id,
            platform: mention.platform,
            mentions: mention.mentions,
            sentiment: mention.sentiment,
            engagement_rate: mention.engagement_rate,
            influence_score: mention.influence_score,
            last_updated: Some(Utc::now()),
        };
        state.social_mentions.insert(id, record.clone());
        Ok(record)
    }

    async fn market_trends(&self, event_id: Option<i32>) -> Result<Vec<MarketTrend>> {
        let state = self.state.read().await;
        Ok(state
            .market_trends
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_market_trend(&self, trend: InsertMarketTrend) -> Result<MarketTrend> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = MarketTrend {
            id,
            event_id: trend.event_id,
            trend_name: trend.trend_name,
            category: trend.category,
            impact: trend.impact,
            confidence: trend.confidence,
            description: trend.description,
            predicted_growth: trend.predicted_growth,
            data_source: trend.data_source,
            last_updated: Some(Utc::now()),
        };
        state.market_trends.insert(id, record.clone());
        Ok(record)
    }

    async fn top_performers(&self, event_id: Option<i32>) -> Result<Vec<TopPerformer>> {
        let state = self.state.read().await;
        let mut rows: Vec<TopPerformer> = state
            .top_performers
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by_key(|d| d.ranking);
        Ok(rows)
    }

    async fn create_top_performer(&self, performer: InsertTopPerformer) -> Result<TopPerformer> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = TopPerformer {
            id,
            event_id: performer.event_id,
            name: performer.name,
            region: performer.region,
            store_id: performer.store_id,
            sales: performer.sales,
            target_percentage: performer.target_percentage,
            ranking: performer.ranking,
            last_updated: Some(Utc::now()),
        };
        state.top_performers.insert(id, record.clone());
        Ok(record)
    }

    async fn ai_insights(&self, event_id: Option<i32>) -> Result<Vec<AiInsight>> {
        let state = self.state.read().await;
        let mut rows: Vec<AiInsight> = state
            .ai_insights
            .values()
            .filter(|d| event_id.is_none() || d.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by_key(|d| (d.priority, d.created_at, d.id));
        Ok(rows)
    }

    async fn create_ai_insight(&self, insight: InsertAiInsight) -> Result<AiInsight> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = AiInsight {
            id,
            event_id: insight.event_id,
            category: insight.category,
            title: insight.title,
            description: insight.description,
            confidence: insight.confidence,
            impact: insight.impact,
            data_source: insight.data_source,
            priority: insight.priority,
            created_at: Some(Utc::now()),
        };
        state.ai_insights.insert(id, record.clone());
        Ok(record)
    }

    async fn inventory_alerts(&self) -> Result<Vec<InventoryAlert>> {
        let state = self.state.read().await;
        let mut rows: Vec<InventoryAlert> = state.inventory_alerts.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(rows)
    }

    async fn create_inventory_alert(&self, alert: InsertInventoryAlert) -> Result<InventoryAlert> {
        let mut state = self.state.write().await;
        let id = state.next_id();
        let record = InventoryAlert {
            id,
            product_id: alert.product_id,
            store_id: alert.store_id,
            location: alert.location,
            current_stock: alert.current_stock,
            min_threshold: alert.min_threshold,
            severity: alert.severity,
            eta: alert.eta,
            auto_reorder_enabled: alert.auto_reorder_enabled,
            created_at: Some(Utc::now()),
        };
        state.inventory_alerts.insert(id, record.clone());
        Ok(record)
    }
}
