use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::system_component::{
    InsertSystemComponent, SystemComponent, SystemComponentUpdate,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_components")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: String,
    pub response_time_ms: Option<i32>,
    pub last_check: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SystemComponent {
    fn from(m: Model) -> Self {
        SystemComponent {
            id: m.id,
            name: m.name,
            status: m.status,
            response_time_ms: m.response_time_ms,
            last_check: m.last_check,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<SystemComponent>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    component: InsertSystemComponent,
) -> Result<SystemComponent, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(component.name),
        status: Set(component.status),
        response_time_ms: Set(component.response_time_ms),
        last_check: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

/// Full status overwrite; `last_check` is always restamped.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    update: SystemComponentUpdate,
) -> Result<Option<SystemComponent>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = model.into();
    active.status = Set(update.status);
    active.response_time_ms = Set(update.response_time);
    active.last_check = Set(Some(Utc::now()));
    let model = active.update(db).await?;
    Ok(Some(model.into()))
}
