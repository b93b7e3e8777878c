use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertMarketTrend, MarketTrend};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "market_trends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub trend_name: String,
    pub category: String,
    pub impact: String,
    pub confidence: String,
    pub description: String,
    pub predicted_growth: Option<String>,
    pub data_source: String,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MarketTrend {
    fn from(m: Model) -> Self {
        MarketTrend {
            id: m.id,
            event_id: m.event_id,
            trend_name: m.trend_name,
            category: m.category,
            impact: m.impact,
            confidence: m.confidence,
            description: m.description,
            predicted_growth: m.predicted_growth,
            data_source: m.data_source,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<MarketTrend>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(db: &DatabaseConnection, trend: InsertMarketTrend) -> Result<MarketTrend, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(trend.event_id),
        trend_name: Set(trend.trend_name),
        category: Set(trend.category),
        impact: Set(trend.impact),
        confidence: Set(trend.confidence),
        description: Set(trend.description),
        predicted_growth: Set(trend.predicted_growth),
        data_source: Set(trend.data_source),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
