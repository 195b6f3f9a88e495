//! Process-lifetime implementation of ItemRepository

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;
use crate::store::ItemStore;

/// Keeps the store in memory behind a single mutex. State is lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    store: Mutex<ItemStore>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        self.store.lock().await.create(input)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.store.lock().await.list_all())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u64) -> ItemResult<Item> {
        self.store.lock().await.get_by_id(id)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: u64, input: ItemInput) -> ItemResult<Item> {
        self.store.lock().await.update(id, input)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> ItemResult<Item> {
        self.store.lock().await.delete(id)
    }
}
