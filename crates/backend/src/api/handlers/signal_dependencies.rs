use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use contracts::domain::signal_dependency::{InsertSignalDependency, SignalDependency};

use super::EventIdQuery;
use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/signal-dependencies?eventId
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<SignalDependency>>, AppError> {
    Ok(Json(storage.signal_dependencies(query.event_id).await?))
}

/// POST /api/signal-dependencies
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertSignalDependency>,
) -> Result<Json<SignalDependency>, AppError> {
    Ok(Json(storage.create_signal_dependency(body).await?))
}

/// DELETE /api/signal-dependencies/:id
pub async fn delete(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    storage.delete_signal_dependency(id).await?;
    Ok(Json(json!({ "success": true })))
}
