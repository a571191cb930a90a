//! Item store
//!
//! Holds the canonical list of items and hands out identifiers from a
//! monotonic counter that is never reset or reused.

use tokio::sync::RwLock;

use crate::types::{Item, ItemId, NewItem};
use crate::{Error, Result};

/// First identifier handed out by [`ItemStore::seeded`] for created items.
pub const FIRST_CREATED_ID: ItemId = 4;

struct Inner {
    items: Vec<Item>,
    next_id: ItemId,
}

/// In-memory item store
pub struct ItemStore {
    /// Items and the id counter share one lock so create is atomic
    inner: RwLock<Inner>,
}

impl ItemStore {
    /// Create an empty store whose first assigned id is 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the three sample items, with ids 1 to 3
    pub fn seeded() -> Self {
        let items = vec![
            Item {
                id: 1,
                name: "Laptop".to_string(),
                description: Some("High-performance gaming laptop".to_string()),
                price: 1299.99,
            },
            Item {
                id: 2,
                name: "Smartphone".to_string(),
                description: Some("Latest model with advanced camera".to_string()),
                price: 899.99,
            },
            Item {
                id: 3,
                name: "Coffee Maker".to_string(),
                description: Some("Programmable with multiple brewing options".to_string()),
                price: 149.95,
            },
        ];

        tracing::info!(items = items.len(), "item store initialised");

        Self {
            inner: RwLock::new(Inner {
                items,
                next_id: FIRST_CREATED_ID,
            }),
        }
    }

    /// All items in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.items.clone()
    }

    /// Look up an item by id
    pub async fn get(&self, id: ItemId) -> Result<Item> {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(Error::ItemNotFound(id))
    }

    /// Append a new item, assigning it the next id.
    ///
    /// Any id carried by `new_item` is discarded.
    pub async fn create(&self, new_item: NewItem) -> Item {
        let mut inner = self.inner.write().await;

        if let Some(requested) = new_item.id {
            tracing::debug!(requested, "ignoring caller-supplied item id");
        }

        let item = Item {
            id: inner.next_id,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        tracing::debug!(id = item.id, name = %item.name, "item created");
        item
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_store() {
        let store = ItemStore::seeded();
        let items = store.list().await;

        let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(items[0].name, "Laptop");
        assert_eq!(items[2].price, 149.95);
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = ItemStore::seeded();

        let mut last = 0;
        for i in 0..5 {
            let item = store
                .create(NewItem::new(format!("item-{i}"), None, 1.0))
                .await;
            assert!(item.id > last);
            if i == 0 {
                assert_eq!(item.id, FIRST_CREATED_ID);
            }
            last = item.id;
        }

        let items = store.list().await;
        assert_eq!(items.len(), 8);
        let seed_names: Vec<&str> = items[..3].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(seed_names, vec!["Laptop", "Smartphone", "Coffee Maker"]);
        assert_eq!(items[7].name, "item-4");
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = ItemStore::seeded();

        let created = store
            .create(NewItem::new("Tablet", Some("10-inch"), 299.0))
            .await;
        assert_eq!(created.id, 4);
        assert_eq!(created.description.as_deref(), Some("10-inch"));

        let fetched = store.get(4).await.unwrap();
        assert_eq!(fetched, created);

        let err = store.get(99).await.unwrap_err();
        assert!(matches!(err, Error::ItemNotFound(99)));
    }

    #[tokio::test]
    async fn test_unassigned_ids_are_not_found() {
        let store = ItemStore::seeded();

        for id in [0, -1, ItemId::MIN, ItemId::MAX] {
            let err = store.get(id).await.unwrap_err();
            assert!(matches!(err, Error::ItemNotFound(missing) if missing == id));
        }
    }

    #[tokio::test]
    async fn test_caller_id_is_ignored() {
        let store = ItemStore::seeded();

        let mut new_item = NewItem::new("Monitor", None, 199.0);
        new_item.id = Some(1);
        let created = store.create(new_item).await;

        assert_eq!(created.id, 4);
        assert_eq!(store.get(1).await.unwrap().name, "Laptop");
        assert_eq!(store.list().await.len(), 4);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = ItemStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.get(1).await.is_err());

        let item = store.create(NewItem::new("first", None, 0.0)).await;
        assert_eq!(item.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(ItemStore::seeded());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(NewItem::new(format!("item-{i}"), None, i as f64))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(ids.iter().min(), Some(&4));
        assert_eq!(ids.iter().max(), Some(&35));
    }
}
