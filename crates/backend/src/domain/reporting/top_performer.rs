use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertTopPerformer, TopPerformer};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "top_performers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub name: String,
    pub region: String,
    pub store_id: i32,
    pub sales: String,
    pub target_percentage: String,
    pub ranking: i32,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TopPerformer {
    fn from(m: Model) -> Self {
        TopPerformer {
            id: m.id,
            event_id: m.event_id,
            name: m.name,
            region: m.region,
            store_id: m.store_id,
            sales: m.sales,
            target_percentage: m.target_percentage,
            ranking: m.ranking,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<TopPerformer>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.order_by_asc(Column::Ranking).all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    performer: InsertTopPerformer,
) -> Result<TopPerformer, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(performer.event_id),
        name: Set(performer.name),
        region: Set(performer.region),
        store_id: Set(performer.store_id),
        sales: Set(performer.sales),
        target_percentage: Set(performer.target_percentage),
        ranking: Set(performer.ranking),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
