//! Item and list stores
//!
//! Each store is a trait with two implementations:
//! - PostgreSQL (`PgItemRepo`, `PgListRepo`)
//! - in-memory (`MemoryItemStore`, `MemoryListStore`) for tests and `--memory` mode
//!
//! Every operation is persisted immediately. Deletes are no-ops when the
//! target id is absent.

pub mod items;
pub mod lists;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Item, ItemName, TodoList};

pub use items::PgItemRepo;
pub use lists::PgListRepo;
pub use memory::{MemoryItemStore, MemoryListStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate key: {resource} '{key}' already exists")]
    DuplicateKey { resource: &'static str, key: String },
}

impl DbError {
    pub(crate) fn list_not_found(name: &str) -> Self {
        Self::NotFound {
            resource: "list",
            id: name.to_owned(),
        }
    }
}

/// Standalone items backing the default list
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Total number of standalone items.
    async fn count_all(&self) -> Result<i64, DbError>;

    /// Insert `items` only if the store is empty.
    ///
    /// The emptiness check and the insert happen as one conditional write.
    /// Returns `true` when the items were written.
    async fn insert_defaults(&self, items: &[Item]) -> Result<bool, DbError>;

    /// All standalone items in insertion order.
    async fn find_all(&self) -> Result<Vec<Item>, DbError>;

    /// Persist a new item with a fresh id.
    async fn create(&self, name: ItemName) -> Result<Item, DbError>;

    /// Remove an item. Absent ids are not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError>;
}

/// Named lists, keyed by name, each owning an embedded item sequence
#[async_trait]
pub trait ListStore: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>, DbError>;

    /// Persist a new list. Fails with `DuplicateKey` if the name is taken.
    async fn create(&self, name: &str, items: &[Item]) -> Result<TodoList, DbError>;

    /// Persist a new list unless one with this name exists.
    ///
    /// Returns `true` when this call created the list.
    async fn create_if_absent(&self, name: &str, items: &[Item]) -> Result<bool, DbError>;

    /// Append one item to the end of a list's sequence.
    async fn append_item(&self, list: &str, item: &Item) -> Result<(), DbError>;

    /// Overwrite a list's whole item sequence.
    async fn replace_items(&self, list: &str, items: &[Item]) -> Result<(), DbError>;

    /// Drop the item with `id` from a list's sequence (no-op if the id is
    /// not in it). Fails with `NotFound` only when the list itself is absent.
    async fn remove_item_by_id(&self, list: &str, id: Uuid) -> Result<(), DbError>;
}
