use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use contracts::domain::field_config::{
    DataFieldConfig, DataFieldConfigPatch, InsertDataFieldConfig,
};

use super::EventIdQuery;
use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/field-configs?eventId
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<DataFieldConfig>>, AppError> {
    Ok(Json(storage.data_field_configs(query.event_id).await?))
}

/// POST /api/field-configs
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertDataFieldConfig>,
) -> Result<Json<DataFieldConfig>, AppError> {
    Ok(Json(storage.create_data_field_config(body).await?))
}

/// PUT /api/field-configs/:id
pub async fn update(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<DataFieldConfigPatch>,
) -> Result<Json<DataFieldConfig>, AppError> {
    Ok(Json(storage.update_data_field_config(id, body).await?))
}

/// DELETE /api/field-configs/:id
///
/// Acknowledges whether or not the row existed.
pub async fn delete(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    storage.delete_data_field_config(id).await?;
    Ok(Json(json!({ "success": true })))
}
