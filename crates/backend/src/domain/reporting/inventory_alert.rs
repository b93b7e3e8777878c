use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::reporting::{InsertInventoryAlert, InventoryAlert};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: Option<i32>,
    pub store_id: i32,
    pub location: String,
    pub current_stock: i32,
    pub min_threshold: i32,
    pub severity: String,
    pub eta: Option<String>,
    pub auto_reorder_enabled: bool,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryAlert {
    fn from(m: Model) -> Self {
        InventoryAlert {
            id: m.id,
            product_id: m.product_id,
            store_id: m.store_id,
            location: m.location,
            current_stock: m.current_stock,
            min_threshold: m.min_threshold,
            severity: m.severity,
            eta: m.eta,
            auto_reorder_enabled: m.auto_reorder_enabled,
            created_at: m.created_at,
        }
    }
}

/// Severity ordering is lexical, which happens to put critical before
/// info before warning.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<InventoryAlert>, DbErr> {
    let models = Entity::find()
        .order_by_asc(Column::Severity)
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    alert: InsertInventoryAlert,
) -> Result<InventoryAlert, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        product_id: Set(alert.product_id),
        store_id: Set(alert.store_id),
        location: Set(alert.location),
        current_stock: Set(alert.current_stock),
        min_threshold: Set(alert.min_threshold),
        severity: Set(alert.severity),
        eta: Set(alert.eta),
        auto_reorder_enabled: Set(alert.auto_reorder_enabled),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
