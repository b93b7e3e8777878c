use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::war_room::{IncidentResolutionPath, InsertIncidentResolutionPath};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "incident_resolution_paths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub incident_id: Option<i32>,
    pub path_name: String,
    pub path_type: String,
    pub description: String,
    pub success_rate: i32,
    pub time_estimate: Option<String>,
    pub tradeoffs: Option<String>,
    pub priority: i32,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for IncidentResolutionPath {
    fn from(m: Model) -> Self {
        IncidentResolutionPath {
            id: m.id,
            incident_id: m.incident_id,
            path_name: m.path_name,
            path_type: m.path_type,
            description: m.description,
            success_rate: m.success_rate,
            time_estimate: m.time_estimate,
            tradeoffs: m.tradeoffs,
            priority: m.priority,
            created_at: m.created_at,
        }
    }
}

/// Ordered by priority ascending, id as the tiebreak.
pub async fn list_by_incident(
    db: &DatabaseConnection,
    incident_id: i32,
) -> Result<Vec<IncidentResolutionPath>, DbErr> {
    let models = Entity::find()
        .filter(Column::IncidentId.eq(incident_id))
        .order_by_asc(Column::Priority)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    path: InsertIncidentResolutionPath,
) -> Result<IncidentResolutionPath, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        incident_id: Set(path.incident_id),
        path_name: Set(path.path_name),
        path_type: Set(path.path_type),
        description: Set(path.description),
        success_rate: Set(path.success_rate),
        time_estimate: Set(path.time_estimate),
        tradeoffs: Set(path.tradeoffs),
        priority: Set(path.priority),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
