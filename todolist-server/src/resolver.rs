//! List resolution
//!
//! Maps a requested list to the items to render, creating or seeding it on
//! first visit, and routes item mutations to the right store:
//!
//! - "Today" is backed by standalone items in the [`ItemStore`]
//! - every other name is a [`TodoList`](crate::models::TodoList) in the
//!   [`ListStore`], holding embedded copies
//!
//! Creating or reseeding a named list does not return its items inline.
//! The caller gets [`Resolution::Created`] / [`Resolution::Reseeded`] and
//! must read the list again, so what is rendered is always the persisted
//! state.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::db::{DbError, ItemStore, ListStore, MemoryItemStore, MemoryListStore};
use crate::error::Result;
use crate::models::{default_items, Item, ItemName, ListTarget, DEFAULT_LIST_NAME};

/// Outcome of resolving a list
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Items ready to render
    Ready(Vec<Item>),
    /// The list did not exist and was created with the default items; re-read required
    Created,
    /// The list existed with no items and was seeded again; re-read required
    Reseeded,
}

impl Resolution {
    pub fn needs_refetch(&self) -> bool {
        !matches!(self, Self::Ready(_))
    }
}

/// Resolves lists against the item and list stores
#[derive(Clone)]
pub struct ListResolver {
    items: Arc<dyn ItemStore>,
    lists: Arc<dyn ListStore>,
}

impl ListResolver {
    pub fn new(items: Arc<dyn ItemStore>, lists: Arc<dyn ListStore>) -> Self {
        Self { items, lists }
    }

    /// Resolver over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryItemStore::new()),
            Arc::new(MemoryListStore::new()),
        )
    }

    pub fn item_store(&self) -> &dyn ItemStore {
        self.items.as_ref()
    }

    pub fn list_store(&self) -> &dyn ListStore {
        self.lists.as_ref()
    }

    /// Seed the item store with the default items if it is empty.
    ///
    /// Returns `true` if this call did the seeding.
    pub async fn seed_default_items(&self) -> Result<bool> {
        let seeded = self.items.insert_defaults(&default_items()).await?;
        if seeded {
            info!("Seeded default items");
        }
        Ok(seeded)
    }

    /// Items of the default list, seeding the item store first if it is empty.
    pub async fn resolve_default_list(&self) -> Result<Vec<Item>> {
        let found = self.items.find_all().await?;
        if !found.is_empty() {
            return Ok(found);
        }

        self.seed_default_items().await?;
        Ok(self.items.find_all().await?)
    }

    /// Items of a named list, creating or reseeding it when needed.
    ///
    /// The reserved name "Today" resolves to the default list.
    pub async fn resolve_named_list(&self, name: &str) -> Result<Resolution> {
        if name == DEFAULT_LIST_NAME {
            return Ok(Resolution::Ready(self.resolve_default_list().await?));
        }

        match self.lists.find_by_name(name).await? {
            Some(list) if !list.items.is_empty() => Ok(Resolution::Ready(list.items)),
            Some(list) => {
                self.lists
                    .replace_items(&list.name, &default_items())
                    .await?;
                info!(list = %list.name, "Reseeded empty list");
                Ok(Resolution::Reseeded)
            }
            None => {
                if self.lists.create_if_absent(name, &default_items()).await? {
                    info!(list = %name, "Created list");
                } else {
                    debug!(list = %name, "list created by a concurrent request");
                }
                Ok(Resolution::Created)
            }
        }
    }

    /// Resolve whichever list `target` points at.
    pub async fn resolve(&self, target: &ListTarget) -> Result<Resolution> {
        match target {
            ListTarget::Today => Ok(Resolution::Ready(self.resolve_default_list().await?)),
            ListTarget::Named(name) => self.resolve_named_list(name).await,
        }
    }

    /// Add an item to a list and return it.
    ///
    /// A named list must already exist; otherwise this fails with
    /// `DbError::NotFound`.
    pub async fn add_item(&self, target: &ListTarget, item_name: &str) -> Result<Item> {
        let name = ItemName::new(item_name)?;
        match target {
            ListTarget::Today => Ok(self.items.create(name).await?),
            ListTarget::Named(list) => {
                let item = Item::new(name);
                self.lists.append_item(list, &item).await?;
                Ok(item)
            }
        }
    }

    /// Delete an item by id.
    ///
    /// The id is removed from the item store unconditionally and, for a
    /// named list, from that list as well. Whichever store does not hold
    /// the id treats the delete as a no-op, as does a missing list.
    ///
    /// Returns `false` only when the named list does not exist.
    pub async fn delete_item(&self, id: Uuid, target: &ListTarget) -> Result<bool> {
        self.items.delete_by_id(id).await?;

        let ListTarget::Named(list) = target else {
            return Ok(true);
        };
        match self.lists.remove_item_by_id(list, id).await {
            Ok(()) => Ok(true),
            Err(DbError::NotFound { .. }) => {
                debug!(list = %list, %id, "delete on missing list ignored");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
