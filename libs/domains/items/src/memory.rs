use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{ItemError, ItemResult},
    models::{CreateItem, Item, ItemId, UpdateItem},
    repository::ItemRepository,
};

#[derive(Debug)]
struct Store {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local item store.
///
/// Ids come from a counter starting at 1 that only moves forward, so a
/// deleted id is never handed out again. Everything is lost on restart.
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sequence(id: ItemId) -> Option<i64> {
    match id {
        ItemId::Sequence(n) => Some(n),
        ItemId::Uuid(_) => None,
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let Some(key) = sequence(id) else {
            return Ok(None);
        };
        let store = self.store.read().await;
        Ok(store.items.get(&key).cloned())
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let key = store.next_id;
        store.next_id += 1;

        let item = Item::new(ItemId::Sequence(key), input);
        store.items.insert(key, item.clone());

        tracing::info!(item_id = key, "Created item");
        Ok(item)
    }

    async fn update(&self, id: ItemId, input: UpdateItem) -> ItemResult<Item> {
        let key = sequence(id).ok_or(ItemError::NotFound(id))?;
        let mut store = self.store.write().await;

        let item = store.items.get_mut(&key).ok_or(ItemError::NotFound(id))?;
        item.apply_update(input);

        tracing::info!(item_id = key, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> ItemResult<Item> {
        let key = sequence(id).ok_or(ItemError::NotFound(id))?;
        let mut store = self.store.write().await;

        let item = store.items.remove(&key).ok_or(ItemError::NotFound(id))?;

        tracing::info!(item_id = key, "Deleted item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_input(name: &str, price: f64, quantity: i32) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            description: None,
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = InMemoryItemRepository::new();

        let mut previous = 0;
        for i in 0..5 {
            let item = repo.create(create_input(&format!("item-{i}"), 1.0, 1)).await.unwrap();
            let ItemId::Sequence(n) = item.id else {
                panic!("expected a sequence id, got {:?}", item.id);
            };
            assert!(n > previous);
            previous = n;
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create(create_input("a", 1.0, 1)).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(create_input("b", 1.0, 1)).await.unwrap();

        assert_eq!(first.id, ItemId::Sequence(1));
        assert_eq!(second.id, ItemId::Sequence(2));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.list().await.unwrap().is_empty());

        for name in ["first", "second", "third"] {
            repo.create(create_input(name, 1.0, 1)).await.unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_returns_stored_fields() {
        let repo = InMemoryItemRepository::new();
        let input = CreateItem {
            description: Some("blue".to_string()),
            ..create_input("Widget", 9.99, 5)
        };

        let created = repo.create(input.clone()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, Item::new(created.id, input));
    }

    #[tokio::test]
    async fn test_empty_update_returns_item_unchanged() {
        let repo = InMemoryItemRepository::new();
        let created = repo.create(create_input("Widget", 9.99, 5)).await.unwrap();

        let updated = repo.update(created.id, UpdateItem::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_price_to_zero() {
        let repo = InMemoryItemRepository::new();
        let created = repo.create(create_input("Widget", 9.99, 5)).await.unwrap();

        let update = UpdateItem {
            price: Some(0.0),
            ..Default::default()
        };
        let updated = repo.update(created.id, update).await.unwrap();

        assert_eq!(updated.price, 0.0);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.quantity, 5);
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let repo = InMemoryItemRepository::new();
        let result = repo.update(ItemId::Sequence(99), UpdateItem::default()).await;
        assert!(matches!(result, Err(ItemError::NotFound(ItemId::Sequence(99)))));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryItemRepository::new();
        let created = repo.create(create_input("Widget", 9.99, 5)).await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, created);

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(ItemError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_uuid_ids_are_never_found() {
        let repo = InMemoryItemRepository::new();
        repo.create(create_input("Widget", 9.99, 5)).await.unwrap();

        let id = ItemId::Uuid(Uuid::now_v7());
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(matches!(
            repo.update(id, UpdateItem::default()).await,
            Err(ItemError::NotFound(_))
        ));
        assert!(matches!(repo.delete(id).await, Err(ItemError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_widget_lifecycle() {
        let repo = InMemoryItemRepository::new();

        let created = repo.create(create_input("Widget", 9.99, 5)).await.unwrap();
        assert_eq!(created.id, ItemId::Sequence(1));
        assert_eq!(created.description, None);

        let update = UpdateItem {
            quantity: Some(3),
            ..Default::default()
        };
        let updated = repo.update(created.id, update).await.unwrap();
        assert_eq!(updated.quantity, 3);

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted.quantity, 3);

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryItemRepository::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(create_input(&format!("item-{i}"), 1.0, 1))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 20);
        assert_eq!(repo.list().await.unwrap().len(), 20);
    }
}
