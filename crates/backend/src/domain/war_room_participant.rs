use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::war_room::{InsertWarRoomParticipant, WarRoomParticipant};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "war_room_participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub incident_id: Option<i32>,
    pub participant_type: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub description: Option<String>,
    pub eta_minutes: Option<i32>,
    pub badge_color: Option<String>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WarRoomParticipant {
    fn from(m: Model) -> Self {
        WarRoomParticipant {
            id: m.id,
            incident_id: m.incident_id,
            participant_type: m.participant_type,
            name: m.name,
            role: m.role,
            status: m.status,
            description: m.description,
            eta_minutes: m.eta_minutes,
            badge_color: m.badge_color,
            created_at: m.created_at,
        }
    }
}

pub async fn list_by_incident(
    db: &DatabaseConnection,
    incident_id: i32,
) -> Result<Vec<WarRoomParticipant>, DbErr> {
    let models = Entity::find()
        .filter(Column::IncidentId.eq(incident_id))
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    participant: InsertWarRoomParticipant,
) -> Result<WarRoomParticipant, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        incident_id: Set(participant.incident_id),
        participant_type: Set(participant.participant_type),
        name: Set(participant.name),
        role: Set(participant.role),
        status: Set(participant.status),
        description: Set(participant.description),
        eta_minutes: Set(participant.eta_minutes),
        badge_color: Set(participant.badge_color),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
