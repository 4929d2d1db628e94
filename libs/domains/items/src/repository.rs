use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemId, UpdateItem};

/// Repository trait for Item persistence
///
/// Both implementations must behave identically: ids are assigned by the
/// store, `update` and `delete` return `ItemError::NotFound` for unknown ids,
/// and each call is atomic with respect to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, oldest first
    async fn list(&self) -> ItemResult<Vec<Item>>;

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Store a new item under a freshly allocated id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Apply the provided fields, keeping the rest
    async fn update(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item>;

    /// Remove an item, returning it as it was before removal
    async fn delete(&self, id: ItemId) -> ItemResult<Item>;
}
