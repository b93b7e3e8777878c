use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use contracts::domain::incident::{EscalateRequest, Incident, IncidentPatch, InsertIncident};
use contracts::domain::war_room::{
    IncidentResolutionPath, InsertIncidentResolutionPath, InsertWarRoomParticipant,
    WarRoomParticipant,
};

use crate::api::extract::ValidatedJson;
use crate::shared::error::AppError;
use crate::storage::DynStorage;

#[derive(Debug, Deserialize)]
pub struct ActiveQuery {
    pub active: Option<bool>,
}

/// GET /api/incidents?active
pub async fn list(
    State(storage): State<DynStorage>,
    Query(query): Query<ActiveQuery>,
) -> Result<Json<Vec<Incident>>, AppError> {
    let incidents = if query.active == Some(true) {
        storage.active_incidents().await?
    } else {
        storage.incidents().await?
    };
    Ok(Json(incidents))
}

/// POST /api/incidents
pub async fn create(
    State(storage): State<DynStorage>,
    ValidatedJson(body): ValidatedJson<InsertIncident>,
) -> Result<Json<Incident>, AppError> {
    Ok(Json(storage.create_incident(body).await?))
}

/// PUT /api/incidents/:id
pub async fn update(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<IncidentPatch>,
) -> Result<Json<Incident>, AppError> {
    Ok(Json(storage.update_incident(id, body).await?))
}

/// POST /api/incidents/:id/escalate
pub async fn escalate(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<EscalateRequest>,
) -> Result<Json<Incident>, AppError> {
    Ok(Json(storage.escalate_incident(id, body.level).await?))
}

/// GET /api/incidents/:id/participants
pub async fn participants(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<WarRoomParticipant>>, AppError> {
    Ok(Json(storage.war_room_participants(id).await?))
}

/// POST /api/incidents/:id/participants
///
/// The incident id in the path wins over any id in the body.
pub async fn create_participant(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<InsertWarRoomParticipant>,
) -> Result<Json<WarRoomParticipant>, AppError> {
    body.incident_id = Some(id);
    Ok(Json(storage.create_war_room_participant(body).await?))
}

/// GET /api/incidents/:id/resolution-paths
pub async fn resolution_paths(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<IncidentResolutionPath>>, AppError> {
    Ok(Json(storage.incident_resolution_paths(id).await?))
}

/// POST /api/incidents/:id/resolution-paths
pub async fn create_resolution_path(
    State(storage): State<DynStorage>,
    Path(id): Path<i32>,
    ValidatedJson(mut body): ValidatedJson<InsertIncidentResolutionPath>,
) -> Result<Json<IncidentResolutionPath>, AppError> {
    body.incident_id = Some(id);
    Ok(Json(storage.create_incident_resolution_path(body).await?))
}
