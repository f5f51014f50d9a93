use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, NewItem},
    repository::ItemRepository,
};

/// Relational item store backed by SQLite via SeaORM.
///
/// Ids come from the engine's primary-key sequence, and each operation is
/// a single statement, so the engine's own locking makes every logical
/// operation atomic.
pub struct SqliteItemRepository {
    db: DatabaseConnection,
}

impl SqliteItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storage_error(e: sea_orm::DbErr) -> ItemError {
    ItemError::StorageUnavailable(format!("database error: {}", e))
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn append(&self, input: NewItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;

        tracing::info!(item_id = model.id, "Appended item to database");
        Ok(model.into())
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        // Ids outside the i32 key space cannot exist in this backend.
        let Ok(pk) = i32::try_from(id) else {
            return Ok(None);
        };

        let model = entity::Entity::find_by_id(pk)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(Into::into))
    }
}
