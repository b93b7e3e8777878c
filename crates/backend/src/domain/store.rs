use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::store::{InsertStore, Store};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub region: String,
    pub address: Option<String>,
    pub status: String,
    pub store_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(m: Model) -> Self {
        Store {
            id: m.id,
            name: m.name,
            region: m.region,
            address: m.address,
            status: m.status,
            store_count: m.store_count,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Store>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Store>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn list_by_region(db: &DatabaseConnection, region: &str) -> Result<Vec<Store>, DbErr> {
    let models = Entity::find()
        .filter(Column::Region.eq(region))
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn insert(db: &DatabaseConnection, store: InsertStore) -> Result<Store, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(store.name),
        region: Set(store.region),
        address: Set(store.address),
        status: Set(store.status),
        store_count: Set(store.store_count),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
