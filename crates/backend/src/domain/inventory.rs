use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::inventory::{InsertInventory, InventoryPatch, InventoryRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub region: String,
    pub current_stock: i32,
    pub min_threshold: i32,
    pub last_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryRecord {
    fn from(m: Model) -> Self {
        InventoryRecord {
            id: m.id,
            product_id: m.product_id,
            store_id: m.store_id,
            region: m.region,
            current_stock: m.current_stock,
            min_threshold: m.min_threshold,
            last_updated: m.last_updated,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<InventoryRecord>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn list_by_region(
    db: &DatabaseConnection,
    region: &str,
) -> Result<Vec<InventoryRecord>, DbErr> {
    let models = Entity::find()
        .filter(Column::Region.eq(region))
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

/// Items at or below their own threshold. Per-row comparison, so the
/// filter runs over the full table in Rust rather than in SQL.
pub async fn list_low_stock(db: &DatabaseConnection) -> Result<Vec<InventoryRecord>, DbErr> {
    let records = list(db).await?;
    Ok(records.into_iter().filter(|r| r.is_low_stock()).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    record: InsertInventory,
) -> Result<InventoryRecord, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product_id: Set(record.product_id),
        store_id: Set(record.store_id),
        region: Set(record.region),
        current_stock: Set(record.current_stock),
        min_threshold: Set(record.min_threshold),
        last_updated: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: InventoryPatch,
) -> Result<Option<InventoryRecord>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut record: InventoryRecord = model.into();
    record.apply(&patch, Utc::now());
    let active = ActiveModel {
        id: Set(record.id),
        product_id: Set(record.product_id),
        store_id: Set(record.store_id),
        region: Set(record.region),
        current_stock: Set(record.current_stock),
        min_threshold: Set(record.min_threshold),
        last_updated: Set(record.last_updated),
    };
    let model = active.update(db).await?;
    Ok(Some(model.into()))
}
