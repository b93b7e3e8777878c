use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{AiInsight, InsertAiInsight};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_insights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub category: String,
    pub title: String,
    pub description: String,
    pub confidence: String,
    pub impact: String,
    pub data_source: String,
    pub priority: i32,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AiInsight {
    fn from(m: Model) -> Self {
        AiInsight {
            id: m.id,
            event_id: m.event_id,
            category: m.category,
            title: m.title,
            description: m.description,
            confidence: m.confidence,
            impact: m.impact,
            data_source: m.data_source,
            priority: m.priority,
            created_at: m.created_at,
        }
    }
}

/// Priority ascending, oldest first within a priority.
pub async fn list(db: &DatabaseConnection, event_id: Option<i32>) -> Result<Vec<AiInsight>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query
        .order_by_asc(Column::Priority)
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(db: &DatabaseConnection, insight: InsertAiInsight) -> Result<AiInsight, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(insight.event_id),
        category: Set(insight.category),
        title: Set(insight.title),
        description: Set(insight.description),
        confidence: Set(insight.confidence),
        impact: Set(insight.impact),
        data_source: Set(insight.data_source),
        priority: Set(insight.priority),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
