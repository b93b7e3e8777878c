//! Derived rollups assembled from the base tables on every request; nothing
//! here is persisted.

use axum::extract::State;
use axum::Json;

use contracts::dashboards::{RegionalPerformance, StoreMetrics};

use crate::shared::aggregation;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/store-metrics
pub async fn store_metrics(
    State(storage): State<DynStorage>,
) -> Result<Json<StoreMetrics>, AppError> {
    let regional = storage.regional_sales(None).await?;
    Ok(Json(aggregation::store_metrics(&regional)))
}

/// GET /api/regional-performance
pub async fn regional_performance(
    State(storage): State<DynStorage>,
) -> Result<Json<Vec<RegionalPerformance>>, AppError> {
    let regional = storage.regional_sales(None).await?;
    let stores = storage.stores().await?;
    Ok(Json(aggregation::regional_performance(&regional, &stores)))
}
