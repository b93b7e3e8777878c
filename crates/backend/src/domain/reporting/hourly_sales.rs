use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{HourlySalesData, InsertHourlySalesData};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hourly_sales_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub hour: String,
    pub date: DateTimeUtc,
    pub target_sales: String,
    pub actual_sales: String,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HourlySalesData {
    fn from(m: Model) -> Self {
        HourlySalesData {
            id: m.id,
            event_id: m.event_id,
            hour: m.hour,
            date: m.date,
            target_sales: m.target_sales,
            actual_sales: m.actual_sales,
            created_at: m.created_at,
        }
    }
}

/// Chronological regardless of insertion order.
pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<HourlySalesData>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query
        .order_by_asc(Column::Date)
        .order_by_asc(Column::Hour)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    data: InsertHourlySalesData,
) -> Result<HourlySalesData, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(data.event_id),
        hour: Set(data.hour),
        date: Set(data.date),
        target_sales: Set(data.target_sales),
        actual_sales: Set(data.actual_sales),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
