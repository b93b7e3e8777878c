use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::signal_dependency::{InsertSignalDependency, SignalDependency};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "signal_dependencies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub source_bundle: String,
    pub source_field: String,
    pub target_bundle: String,
    pub target_field: String,
    pub dependency_type: String,
    pub weight: Option<i32>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SignalDependency {
    fn from(m: Model) -> Self {
        SignalDependency {
            id: m.id,
            event_id: m.event_id,
            source_bundle: m.source_bundle,
            source_field: m.source_field,
            target_bundle: m.target_bundle,
            target_field: m.target_field,
            dependency_type: m.dependency_type,
            weight: m.weight,
            created_at: m.created_at,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<SignalDependency>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    dependency: InsertSignalDependency,
) -> Result<SignalDependency, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(dependency.event_id),
        source_bundle: Set(dependency.source_bundle),
        source_field: Set(dependency.source_field),
        target_bundle: Set(dependency.target_bundle),
        target_field: Set(dependency.target_field),
        dependency_type: Set(dependency.dependency_type),
        weight: Set(dependency.weight),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

/// Succeeds whether or not the row exists.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
