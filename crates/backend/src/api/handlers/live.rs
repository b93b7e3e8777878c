use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};

use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/live/metrics
///
/// The latest snapshot with a ±5% display-only fluctuation applied to the
/// sales figures. Nothing is written back; two calls disagree by design.
pub async fn metrics(State(storage): State<DynStorage>) -> Result<Json<Value>, AppError> {
    let Some(snapshot) = storage.latest_sales_metrics().await? else {
        return Ok(Json(json!({})));
    };

    let fluctuation = (rand::thread_rng().gen::<f64>() - 0.5) * 0.1;
    let total: f64 = snapshot.total_sales.parse().unwrap_or(0.0);
    let customers = (snapshot.active_customers as f64 * (1.0 + fluctuation * 0.5)).floor() as i32;

    let mut body =
        serde_json::to_value(&snapshot).map_err(|e| AppError::Storage(e.to_string()))?;
    body["totalSales"] = json!(format!("{:.2}", total * (1.0 + fluctuation)));
    body["activeCustomers"] = json!(customers);
    body["timestamp"] = json!(Utc::now());
    Ok(Json(body))
}
