use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{CustomerBehaviorMetrics, InsertCustomerBehaviorMetrics};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_behavior_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub total_visitors: i32,
    pub bounce_rate: String,
    pub session_duration: i32,
    pub pages_per_session: String,
    pub customer_satisfaction: String,
    pub nps_score: i32,
    pub timestamp: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CustomerBehaviorMetrics {
    fn from(m: Model) -> Self {
        CustomerBehaviorMetrics {
            id: m.id,
            event_id: m.event_id,
            total_visitors: m.total_visitors,
            bounce_rate: m.bounce_rate,
            session_duration: m.session_duration,
            pages_per_session: m.pages_per_session,
            customer_satisfaction: m.customer_satisfaction,
            nps_score: m.nps_score,
            timestamp: m.timestamp,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<CustomerBehaviorMetrics>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn latest(db: &DatabaseConnection) -> Result<Option<CustomerBehaviorMetrics>, DbErr> {
    let model = Entity::find()
        .order_by_desc(Column::Timestamp)
        .one(db)
        .await?;
    Ok(model.map(Into::into))
}

pub async fn insert(
    db: &DatabaseConnection,
    metrics: InsertCustomerBehaviorMetrics,
) -> Result<CustomerBehaviorMetrics, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(metrics.event_id),
        total_visitors: Set(metrics.total_visitors),
        bounce_rate: Set(metrics.bounce_rate),
        session_duration: Set(metrics.session_duration),
        pages_per_session: Set(metrics.pages_per_session),
        customer_satisfaction: Set(metrics.customer_satisfaction),
        nps_score: Set(metrics.nps_score),
        timestamp: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
