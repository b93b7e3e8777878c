use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use contracts::domain::store::Store;

use crate::shared::error::AppError;
use crate::storage::DynStorage;

#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// GET /api/stores?region
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<RegionQuery>,
) -> Result<Json<Vec<Store>>, AppError> {
    let stores = match query.region {
        Some(region) => storage.stores_by_region(&region).await?,
        None => storage.stores().await?,
    };
    Ok(Json(stores))
}

/// GET /api/stores/:id
pub async fn get_by_id(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Store>, AppError> {
    storage
        .store(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Store not found".to_string()))
}
