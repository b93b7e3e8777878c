use axum::extract::{Path, State};
use axum::Json;

use contracts::domain::product::{InsertProduct, Product};

use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/products
pub async fn list(State(storage): State<DynStorage>) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(storage.products().await?))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    storage
        .product(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

/// POST /api/products
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertProduct>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(storage.create_product(body).await?))
}
