//! Todo items and the default seed set

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// Seed texts shown on a fresh list, in display order.
pub const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todo list",
    "Hit the + button to add a new item",
    "<-- Hit this to delete an item",
];

/// Validated item name (non-empty after trimming)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// Surrounding whitespace is trimmed; a name that is empty after
    /// trimming is rejected.
    ///
    /// # Example
    /// ```
    /// use todolist_server::models::ItemName;
    ///
    /// assert_eq!(ItemName::new("  milk ").unwrap().as_str(), "milk");
    /// assert!(ItemName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "item name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single checkbox row.
///
/// The same shape is used for standalone items (default list) and for the
/// copies embedded in a named list. `id` is stored as `_id` inside a list's
/// JSON item sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

impl Item {
    /// Build a new item with a fresh identifier.
    pub fn new(name: ItemName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into_string(),
        }
    }
}

/// The default item set with fresh identifiers.
///
/// Every call yields new ids, so seeding the item store and seeding any
/// number of lists never shares an identifier between them.
pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEM_NAMES
        .iter()
        .map(|name| Item {
            id: Uuid::new_v4(),
            name: (*name).to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(
            ItemName::new("").unwrap_err(),
            ValidationError::Empty { field: "item name" }
        );
        assert!(ItemName::new(" \t\n").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = ItemName::new("  buy milk  ").unwrap();
        assert_eq!(name.as_str(), "buy milk");
    }

    #[test]
    fn default_items_in_order() {
        let items = default_items();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, DEFAULT_ITEM_NAMES);
    }

    #[test]
    fn default_items_fresh_ids_per_call() {
        let a = default_items();
        let b = default_items();
        for item in &a {
            assert!(b.iter().all(|other| other.id != item.id));
        }
    }

    #[test]
    fn serializes_id_as_underscore_id() {
        let item = Item::new(ItemName::new("milk").unwrap());
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], item.id.to_string());
        assert_eq!(value["name"], "milk");
        assert!(value.get("id").is_none());
    }
}
