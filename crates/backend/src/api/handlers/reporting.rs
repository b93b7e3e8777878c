//! Read-only endpoints over the reporting tables. All of them accept the
//! optional `?eventId=` filter except inventory alerts, which are global.

use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};

use contracts::domain::reporting::{
    AiInsight, CustomerBehaviorMetrics, HourlySalesData, InventoryAlert, MarketTrend,
    ProductPerformance, RegionalSalesData, SocialMention, TopPerformer,
};

use super::EventIdQuery;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/hourly-sales?eventId
pub async fn hourly_sales(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<HourlySalesData>>, AppError> {
    Ok(Json(storage.hourly_sales(query.event_id).await?))
}

/// GET /api/product-performance?eventId
pub async fn product_performance(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<ProductPerformance>>, AppError> {
    Ok(Json(storage.product_performance(query.event_id).await?))
}

/// GET /api/regional-sales?eventId
pub async fn regional_sales(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<RegionalSalesData>>, AppError> {
    Ok(Json(storage.regional_sales(query.event_id).await?))
}

/// GET /api/customer-behavior?eventId
pub async fn customer_behavior(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<CustomerBehaviorMetrics>>, AppError> {
    Ok(Json(storage.customer_behavior(query.event_id).await?))
}

/// GET /api/customer-behavior/latest
pub async fn customer_behavior_latest(
    State(storage): State<DynStorage>,
) -> Result<Json<Value>, AppError> {
    let body = match storage.latest_customer_behavior().await? {
        Some(metrics) => {
            serde_json::to_value(metrics).map_err(|e| AppError::Storage(e.to_string()))?
        }
        None => json!({}),
    };
    Ok(Json(body))
}

/// GET /api/social-mentions?eventId
pub async fn social_mentions(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<SocialMention>>, AppError> {
    Ok(Json(storage.social_mentions(query.event_id).await?))
}

/// GET /api/market-trends?eventId
pub async fn market_trends(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<MarketTrend>>, AppError> {
    Ok(Json(storage.market_trends(query.event_id).await?))
}

/// GET /api/top-performers?eventId
pub async fn top_performers(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<TopPerformer>>, AppError> {
    Ok(Json(storage.top_performers(query.event_id).await?))
}

/// GET /api/ai-insights?eventId
pub async fn ai_insights(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<AiInsight>>, AppError> {
    Ok(Json(storage.ai_insights(query.event_id).await?))
}

/// GET /api/inventory-alerts
pub async fn inventory_alerts(
    State(storage): State<DynStorage>,
) -> Result<Json<Vec<InventoryAlert>>, AppError> {
    Ok(Json(storage.inventory_alerts().await?))
}
