use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::field_config::{
    DataFieldConfig, DataFieldConfigPatch, InsertDataFieldConfig,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "data_field_configs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub bundle_id: String,
    pub data_source: String,
    pub field_name: String,
    pub update_frequency: String,
    pub retention_days: i32,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DataFieldConfig {
    fn from(m: Model) -> Self {
        DataFieldConfig {
            id: m.id,
            event_id: m.event_id,
            bundle_id: m.bundle_id,
            data_source: m.data_source,
            field_name: m.field_name,
            update_frequency: m.update_frequency,
            retention_days: m.retention_days,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<DataFieldConfig>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    config: InsertDataFieldConfig,
) -> Result<DataFieldConfig, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(config.event_id),
        bundle_id: Set(config.bundle_id),
        data_source: Set(config.data_source),
        field_name: Set(config.field_name),
        update_frequency: Set(config.update_frequency),
        retention_days: Set(config.retention_days),
        is_active: Set(config.is_active),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: DataFieldConfigPatch,
) -> Result<Option<DataFieldConfig>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut record: DataFieldConfig = model.into();
    record.apply(&patch);
    let active = ActiveModel {
        id: Set(record.id),
        event_id: Set(record.event_id),
        bundle_id: Set(record.bundle_id),
        data_source: Set(record.data_source),
        field_name: Set(record.field_name),
        update_frequency: Set(record.update_frequency),
        retention_days: Set(record.retention_days),
        is_active: Set(record.is_active),
        created_at: Set(record.created_at),
    };
    let model = active.update(db).await?;
    Ok(Some(model.into()))
}

/// Succeeds whether or not the row exists.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), DbErr> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
