use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// SeaORM entity for the `items` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image_filename: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain Item
impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
            category: model.category,
            image_filename: model.image_filename,
        }
    }
}

// Conversion from domain NewItem to SeaORM ActiveModel; the engine
// assigns the primary key.
impl From<crate::models::NewItem> for ActiveModel {
    fn from(input: crate::models::NewItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            category: Set(input.category),
            image_filename: Set(input.image_filename),
        }
    }
}
