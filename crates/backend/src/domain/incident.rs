use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::incident::{Incident, IncidentPatch, InsertIncident};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "incidents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub incident_id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub status: String,
    pub assigned_team: Option<String>,
    pub impact: Option<String>,
    pub eta_minutes: Option<i32>,
    pub escalation_level: i32,
    pub users_affected: Option<i32>,
    pub revenue_at_risk: Option<String>,
    pub current_action: Option<String>,
    pub action_eta_minutes: Option<i32>,
    pub action_owner: Option<String>,
    pub war_room_active: bool,
    pub war_room_participants: i32,
    pub created_at: Option<DateTimeUtc>,
    pub resolved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Incident {
    fn from(m: Model) -> Self {
        Incident {
            id: m.id,
            incident_id: m.incident_id,
            title: m.title,
            description: m.description,
            severity: m.severity,
            status: m.status,
            assigned_team: m.assigned_team,
            impact: m.impact,
            eta_minutes: m.eta_minutes,
            escalation_level: m.escalation_level,
            users_affected: m.users_affected,
            revenue_at_risk: m.revenue_at_risk,
            current_action: m.current_action,
            action_eta_minutes: m.action_eta_minutes,
            action_owner: m.action_owner,
            war_room_active: m.war_room_active,
            war_room_participants: m.war_room_participants,
            created_at: m.created_at,
            resolved_at: m.resolved_at,
        }
    }
}

fn to_active(record: Incident) -> ActiveModel {
    ActiveModel {
        id: Set(record.id),
        incident_id: Set(record.incident_id),
        title: Set(record.title),
        description: Set(record.description),
        severity: Set(record.severity),
        status: Set(record.status),
        assigned_team: Set(record.assigned_team),
        impact: Set(record.impact),
        eta_minutes: Set(record.eta_minutes),
        escalation_level: Set(record.escalation_level),
        users_affected: Set(record.users_affected),
        revenue_at_risk: Set(record.revenue_at_risk),
        current_action: Set(record.current_action),
        action_eta_minutes: Set(record.action_eta_minutes),
        action_owner: Set(record.action_owner),
        war_room_active: Set(record.war_room_active),
        war_room_participants: Set(record.war_room_participants),
        created_at: Set(record.created_at),
        resolved_at: Set(record.resolved_at),
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Incident>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

/// Neither resolved nor closed.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Incident>, DbErr> {
    let models = Entity::find()
        .filter(Column::Status.is_not_in(["resolved", "closed"]))
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(db: &DatabaseConnection, incident: InsertIncident) -> Result<Incident, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        incident_id: Set(incident.incident_id),
        title: Set(incident.title),
        description: Set(incident.description),
        severity: Set(incident.severity),
        status: Set(incident.status),
        assigned_team: Set(incident.assigned_team),
        impact: Set(incident.impact),
        eta_minutes: Set(incident.eta_minutes),
        escalation_level: Set(incident.escalation_level),
        users_affected: Set(incident.users_affected),
        revenue_at_risk: Set(incident.revenue_at_risk),
        current_action: Set(incident.current_action),
        action_eta_minutes: Set(incident.action_eta_minutes),
        action_owner: Set(incident.action_owner),
        war_room_active: Set(incident.war_room_active),
        war_room_participants: Set(incident.war_room_participants),
        created_at: Set(Some(Utc::now())),
        resolved_at: Set(None),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: IncidentPatch,
) -> Result<Option<Incident>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut record: Incident = model.into();
    record.apply(&patch, Utc::now());
    let model = to_active(record).update(db).await?;
    Ok(Some(model.into()))
}
