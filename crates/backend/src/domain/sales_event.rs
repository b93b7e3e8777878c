use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::sales_event::{InsertSalesEvent, SalesEvent, SalesEventPatch};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub target_revenue: String,
    pub status: String,
    pub signal_config: Option<Json>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SalesEvent {
    fn from(m: Model) -> Self {
        SalesEvent {
            id: m.id,
            name: m.name,
            start_date: m.start_date,
            end_date: m.end_date,
            target_revenue: m.target_revenue,
            status: m.status,
            signal_config: m.signal_config,
            created_at: m.created_at,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<SalesEvent>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<SalesEvent>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, event: InsertSalesEvent) -> Result<SalesEvent, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(event.name),
        start_date: Set(event.start_date),
        end_date: Set(event.end_date),
        target_revenue: Set(event.target_revenue),
        status: Set(event.status),
        signal_config: Set(event.signal_config),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: SalesEventPatch,
) -> Result<Option<SalesEvent>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut record: SalesEvent = model.into();
    record.apply(&patch);
    let active = ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        target_revenue: Set(record.target_revenue),
        status: Set(record.status),
        signal_config: Set(record.signal_config),
        created_at: Set(record.created_at),
    };
    let model = active.update(db).await?;
    Ok(Some(model.into()))
}
