//! In-memory stores
//!
//! Same contracts as the PostgreSQL repositories. Each operation holds the
//! lock for its whole body, so the conditional writes are atomic here too.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{DbError, ItemStore, ListStore};
use crate::models::{Item, ItemName, TodoList};

/// Standalone items held in a vector (insertion order)
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn count_all(&self) -> Result<i64, DbError> {
        Ok(self.items.lock().await.len() as i64)
    }

    async fn insert_defaults(&self, items: &[Item]) -> Result<bool, DbError> {
        let mut stored = self.items.lock().await;
        if !stored.is_empty() {
            return Ok(false);
        }
        stored.extend_from_slice(items);
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Item>, DbError> {
        Ok(self.items.lock().await.clone())
    }

    async fn create(&self, name: ItemName) -> Result<Item, DbError> {
        let item = Item::new(name);
        self.items.lock().await.push(item.clone());
        Ok(item)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError> {
        if !remove_by_id(&mut *self.items.lock().await, id) {
            tracing::debug!(%id, "no standalone item to delete");
        }
        Ok(())
    }
}

/// Named lists keyed by name
#[derive(Debug, Default)]
pub struct MemoryListStore {
    lists: Mutex<HashMap<String, TodoList>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>, DbError> {
        Ok(self.lists.lock().await.get(name).cloned())
    }

    async fn create(&self, name: &str, items: &[Item]) -> Result<TodoList, DbError> {
        let mut lists = self.lists.lock().await;
        if lists.contains_key(name) {
            return Err(DbError::DuplicateKey {
                resource: "list",
                key: name.to_owned(),
            });
        }
        let list = TodoList::new(name, items.to_vec());
        lists.insert(name.to_owned(), list.clone());
        Ok(list)
    }

    async fn create_if_absent(&self, name: &str, items: &[Item]) -> Result<bool, DbError> {
        let mut lists = self.lists.lock().await;
        if lists.contains_key(name) {
            return Ok(false);
        }
        lists.insert(name.to_owned(), TodoList::new(name, items.to_vec()));
        Ok(true)
    }

    async fn append_item(&self, list: &str, item: &Item) -> Result<(), DbError> {
        let mut lists = self.lists.lock().await;
        let found = lists
            .get_mut(list)
            .ok_or_else(|| DbError::list_not_found(list))?;
        found.items.push(item.clone());
        Ok(())
    }

    async fn replace_items(&self, list: &str, items: &[Item]) -> Result<(), DbError> {
        let mut lists = self.lists.lock().await;
        let found = lists
            .get_mut(list)
            .ok_or_else(|| DbError::list_not_found(list))?;
        found.items = items.to_vec();
        Ok(())
    }

    async fn remove_item_by_id(&self, list: &str, id: Uuid) -> Result<(), DbError> {
        let mut lists = self.lists.lock().await;
        let found = lists
            .get_mut(list)
            .ok_or_else(|| DbError::list_not_found(list))?;
        if !remove_by_id(&mut found.items, id) {
            tracing::debug!(list = %list, %id, "no embedded item to delete");
        }
        Ok(())
    }
}

/// Drop the item with `id`; false when nothing matched.
fn remove_by_id(items: &mut Vec<Item>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_items;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[tokio::test]
    async fn insert_defaults_only_when_empty() {
        let store = MemoryItemStore::new();
        assert!(store.insert_defaults(&default_items()).await.unwrap());
        assert!(!store.insert_defaults(&default_items()).await.unwrap());
        assert_eq!(store.count_all().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn item_delete_is_idempotent() {
        let store = MemoryItemStore::new();
        let item = store.create(name("milk")).await.unwrap();

        store.delete_by_id(item.id).await.unwrap();
        store.delete_by_id(item.id).await.unwrap();
        store.delete_by_id(Uuid::new_v4()).await.unwrap();

        assert_eq!(store.count_all().await.unwrap(), 0);
    }

    #[test]
    fn remove_by_id_reports_no_op() {
        let mut items = vec![Item::new(name("milk"))];
        let id = items[0].id;

        assert!(!remove_by_id(&mut items, Uuid::new_v4()));
        assert_eq!(items.len(), 1);
        assert!(remove_by_id(&mut items, id));
        assert!(!remove_by_id(&mut items, id));
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryItemStore::new();
        let a = store.create(name("a")).await.unwrap();
        let b = store.create(name("b")).await.unwrap();
        assert_eq!(store.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn list_create_rejects_duplicates() {
        let store = MemoryListStore::new();
        store.create("groceries", &default_items()).await.unwrap();

        let err = store.create("groceries", &[]).await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateKey { resource: "list", .. }));
        assert!(!store.create_if_absent("groceries", &[]).await.unwrap());

        // Original items untouched
        let list = store.find_by_name("groceries").await.unwrap().unwrap();
        assert_eq!(list.items.len(), 3);
    }

    #[tokio::test]
    async fn list_item_mutations() {
        let store = MemoryListStore::new();
        let seed = default_items();
        assert!(store.create_if_absent("work", &seed).await.unwrap());

        let extra = Item::new(name("report"));
        store.append_item("work", &extra).await.unwrap();
        store.remove_item_by_id("work", seed[0].id).await.unwrap();
        // Unknown id in an existing list is a no-op
        store.remove_item_by_id("work", Uuid::new_v4()).await.unwrap();

        let list = store.find_by_name("work").await.unwrap().unwrap();
        assert_eq!(list.items, vec![seed[1].clone(), seed[2].clone(), extra]);

        store.replace_items("work", &[]).await.unwrap();
        let list = store.find_by_name("work").await.unwrap().unwrap();
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn missing_list_is_not_found() {
        let store = MemoryListStore::new();
        let item = Item::new(name("x"));

        assert!(store.find_by_name("nope").await.unwrap().is_none());
        assert!(matches!(
            store.append_item("nope", &item).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            store.replace_items("nope", &[]).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            store.remove_item_by_id("nope", item.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
