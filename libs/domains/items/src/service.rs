//! Item Service - the operations the HTTP layer calls

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

/// Item service.
///
/// Validation and ordering rules live in the store so they run inside the
/// repository's critical section; the service adds tracing and outcome logs.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<Item> {
        let item = self.repository.create(input).await?;
        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: u64, input: ItemInput) -> ItemResult<Item> {
        let item = self.repository.update(id, input).await?;
        tracing::info!(item_id = id, "Item updated");
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<Item> {
        let item = self.repository.delete(id).await?;
        tracing::info!(item_id = id, "Item deleted");
        Ok(item)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
