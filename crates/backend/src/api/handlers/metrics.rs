use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};

use contracts::domain::sales_metrics::{InsertSalesMetrics, SalesMetrics};

use super::EventIdQuery;
use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/metrics?eventId
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<EventIdQuery>,
) -> Result<Json<Vec<SalesMetrics>>, AppError> {
    Ok(Json(storage.sales_metrics(query.event_id).await?))
}

/// POST /api/metrics
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertSalesMetrics>,
) -> Result<Json<SalesMetrics>, AppError> {
    Ok(Json(storage.create_sales_metrics(body).await?))
}

/// GET /api/metrics/latest
///
/// `{}` when no snapshot has been recorded yet; never a 404.
pub async fn latest(State(storage): State<DynStorage>) -> Result<Json<Value>, AppError> {
    let body = match storage.latest_sales_metrics().await? {
        Some(snapshot) => {
            serde_json::to_value(snapshot).map_err(|e| AppError::Storage(e.to_string()))?
        }
        None => json!({}),
    };
    Ok(Json(body))
}
