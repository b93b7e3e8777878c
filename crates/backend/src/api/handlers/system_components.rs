use axum::extract::{Path, State};
use axum::Json;

use contracts::domain::system_component::{SystemComponent, SystemComponentUpdate};

use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

/// GET /api/system/components
pub async fn list(
    State(storage): State<DynStorage>,
) -> Result<Json<Vec<SystemComponent>>, AppError> {
    Ok(Json(storage.system_components().await?))
}

/// PUT /api/system/components/:id
pub async fn update(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<SystemComponentUpdate>,
) -> Result<Json<SystemComponent>, AppError> {
    Ok(Json(storage.update_system_component(id, body).await?))
}
