use std::sync::Arc;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemPage, NewItem};
use crate::naming::stored_image_name;
use crate::repository::ItemRepository;

/// Service layer orchestrating the catalog: input validation,
/// content-addressed image naming, and store access.
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate the submission, derive the stored image name, and append.
    ///
    /// Empty `name` or `category` are rejected here regardless of what the
    /// transport layer allows.
    pub async fn add_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::InvalidInput(e.to_string()))?;

        let image_filename = stored_image_name(&input.image);

        let item = self
            .repository
            .append(NewItem {
                name: input.name,
                category: input.category,
                image_filename,
            })
            .await?;

        tracing::info!(item_id = item.id, "Added catalog item");
        Ok(item)
    }

    /// Return the full collection in insertion order.
    pub async fn list_items(&self) -> ItemResult<ItemPage> {
        let items = self.repository.list_all().await?;
        Ok(ItemPage { items })
    }

    /// Look up an item by its external string id.
    ///
    /// A non-numeric id is invalid input, not a missing record.
    pub async fn get_item(&self, raw_id: &str) -> ItemResult<Item> {
        let id: i64 = raw_id.parse().map_err(|_| {
            ItemError::InvalidInput(format!("item id must be an integer, got '{}'", raw_id))
        })?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}
