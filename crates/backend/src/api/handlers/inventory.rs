use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use contracts::domain::inventory::{InventoryPatch, InventoryRecord, InventoryView};

use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// GET /api/inventory?region
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<Vec<InventoryView>>, AppError> {
    let views = match query.region {
        Some(region) => storage.inventory_by_region(&region).await?,
        None => storage.inventory().await?,
    };
    Ok(Json(views))
}

/// GET /api/inventory/low-stock
pub async fn low_stock(
    State(storage): State<DynStorage>,
) -> Result<Json<Vec<InventoryView>>, AppError> {
    Ok(Json(storage.low_stock_inventory().await?))
}

/// PUT /api/inventory/:id
pub async fn update(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<InventoryPatch>,
) -> Result<Json<InventoryRecord>, AppError> {
    Ok(Json(storage.update_inventory(id, body).await?))
}
