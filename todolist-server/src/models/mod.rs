//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod list;
pub mod validation;

pub use item::{default_items, Item, ItemName, DEFAULT_ITEM_NAMES};
pub use list::{ListTarget, TodoList, DEFAULT_LIST_NAME};
pub use validation::ValidationError;
