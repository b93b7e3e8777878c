use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertSocialMention, SocialMention};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_mentions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: Option<i32>,
    pub platform: String,
    pub mentions: i32,
    pub sentiment: String,
    pub engagement_rate: String,
    pub influence_score: i32,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SocialMention {
    fn from(m: Model) -> Self {
        SocialMention {
            id: m.id,
            event_id: m.event_id,
            platform: m.platform,
            mentions: m.mentions,
            sentiment: m.sentiment,
            engagement_rate: m.engagement_rate,
            influence_score: m.influence_score,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(
    db: &DatabaseConnection,
    event_id: Option<i32>,
) -> Result<Vec<SocialMention>, DbErr> {
    let mut query = Entity::find();
    if let Some(event_id) = event_id {
        query = query.filter(Column::EventId.eq(event_id));
    }
    let models = query.all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    mention: InsertSocialMention,
) -> Result<SocialMention, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        event_id: Set(mention.event_id),
        platform: Set(mention.platform),
        mentions: Set(mention.mentions),
        sentiment: Set(mention.sentiment),
        engagement_rate: Set(mention.engagement_rate),
        influence_score: Set(mention.influence_score),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
