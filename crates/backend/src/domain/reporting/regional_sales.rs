use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertRegionalSalesData, RegionalSalesData};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "regional_sales_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub region: String,
    pub store_count: i32,
    pub revenue: String,
    pub growth_rate: String,
    pub performance_vs_target: String,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RegionalSalesData {
    fn from(m: Model) -> Self {
        RegionalSalesData {
            id: m.id,
            event_id: m.event_id,
            region: m.region,
            store_count: m.store_count,
            revenue: m.revenue,
            growth_rate: m.growth_rate,
            performance_vs_target: m.performance_vs_target,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<RegionalSalesData>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    data: InsertRegionalSalesData,
) -> Result<RegionalSalesData, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(data.event_id),
        region: Set(data.region),
        store_count: Set(data.store_count),
        revenue: Set(data.revenue),
        growth_rate: Set(data.growth_rate),
        performance_vs_target: Set(data.performance_vs_target),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
