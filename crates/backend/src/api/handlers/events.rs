use axum::extract::{Path, State};
use axum::Json;

use contracts::domain::sales_event::{InsertSalesEvent, SalesEvent, SalesEventPatch};

use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/events
pub async fn list(State(storage): State<DynStorage>) -> Result<Json<Vec<SalesEvent>>, AppError> {
    Ok(Json(storage.sales_events().await?))
}

/// POST /api/events
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertSalesEvent>,
) -> Result<Json<SalesEvent>, AppError> {
    Ok(Json(storage.create_sales_event(body).await?))
}

/// PUT /api/events/:id
pub async fn update(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<SalesEventPatch>,
) -> Result<Json<SalesEvent>, AppError> {
    Ok(Json(storage.update_sales_event(id, body).await?))
}
