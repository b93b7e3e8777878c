use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertProductPerformance, ProductPerformance};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: Option<i32>,
    pub event_id: Option<i32>,
    pub revenue: String,
    pub units_sold: i32,
    pub ranking: i32,
    pub growth_rate: Option<String>,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductPerformance {
    fn from(m: Model) -> Self {
        ProductPerformance {
            id: m.id,
            product_id: m.product_id,
            event_id: m.event_id,
            revenue: m.revenue,
            units_sold: m.units_sold,
            ranking: m.ranking,
            growth_rate: m.growth_rate,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<ProductPerformance>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.order_by_asc(Column::Ranking).all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    data: InsertProductPerformance,
) -> Result<ProductPerformance, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product_id: Set(data.product_id),
        event_id: Set(data.event_id),
        revenue: Set(data.revenue),
        units_sold: Set(data.units_sold),
        ranking: Set(data.ranking),
        growth_rate: Set(data.growth_rate),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
