use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use contracts::domain::product::{InsertProduct, Product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub size: Option<String>,
    pub price: String,
    #[sea_orm(unique)]
    pub sku: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            category: m.category,
            size: m.size,
            price: m.price,
            sku: m.sku,
            description: m.description,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    let models = Entity::find().all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Product>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, product: InsertProduct) -> Result<Product, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(product.name),
        category: Set(product.category),
        size: Set(product.size),
        price: Set(product.price),
        sku: Set(product.sku),
        description: Set(product.description),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
