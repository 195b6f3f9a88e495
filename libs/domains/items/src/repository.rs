use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};

/// Repository trait for Item persistence
///
/// Every method runs as one critical section over the whole collection, so
/// check-then-write sequences (update's existence check, id allocation) cannot
/// interleave with other calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Validate and insert a new item
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: u64) -> ItemResult<Item>;

    /// Replace name and date of an existing item
    async fn update(&self, id: u64, input: ItemInput) -> ItemResult<Item>;

    /// Remove an item, returning it
    async fn delete(&self, id: u64) -> ItemResult<Item>;
}
