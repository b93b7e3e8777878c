use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::sales_metrics::{InsertSalesMetrics, SalesMetrics};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub timestamp: DateTimeUtc,
    pub total_sales: String,
    pub active_customers: i32,
    pub avg_basket_size: String,
    pub conversion_rate: String,
    pub inventory_health: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SalesMetrics {
    fn from(m: Model) -> Self {
        SalesMetrics {
            id: m.id,
            event_id: m.event_id,
            timestamp: m.timestamp,
            total_sales: m.total_sales,
            active_customers: m.active_customers,
            avg_basket_size: m.avg_basket_size,
            conversion_rate: m.conversion_rate,
            inventory_health: m.inventory_health,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<SalesMetrics>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

/// Raw latest snapshot by timestamp. The caller recomputes `total_sales`
/// before serving it.
pub async fn latest(db: &DatabaseConnection) -> Result<Option<SalesMetrics>, DbErr> {
    let model = Entity::find()
        .order_by_desc(Column::Timestamp)
        .one(db)
        .await?;
    Ok(model.map(Into::into))
}

pub async fn insert(
    db: &DatabaseConnection,
    metrics: InsertSalesMetrics,
) -> Result<SalesMetrics, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(metrics.event_id),
        timestamp: Set(metrics.timestamp),
        total_sales: Set(metrics.total_sales),
        active_customers: Set(metrics.active_customers),
        avg_basket_size: Set(metrics.avg_basket_size),
        conversion_rate: Set(metrics.conversion_rate),
        inventory_health: Set(metrics.inventory_health),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
