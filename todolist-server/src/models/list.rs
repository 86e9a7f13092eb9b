//! Named lists and list targeting

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Item;

/// Title of the default list, backed by standalone items.
///
/// A named list can never be called this: the name always routes to the
/// default list.
pub const DEFAULT_LIST_NAME: &str = "Today";

/// A named list with its embedded item sequence
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    pub id: Uuid,
    pub name: String,
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
}

impl TodoList {
    pub fn new(name: &str, items: Vec<Item>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            items,
            created_at: Utc::now(),
        }
    }
}

/// Which list a request is aimed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The default "Today" list (standalone items)
    Today,
    /// Any other list (embedded items)
    Named(String),
}

impl ListTarget {
    /// Map a list name to its target.
    ///
    /// `"Today"` and the empty string both mean the default list.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name == DEFAULT_LIST_NAME {
            Self::Today
        } else {
            Self::Named(name.to_owned())
        }
    }

    /// Display title of the list.
    pub fn title(&self) -> &str {
        match self {
            Self::Today => DEFAULT_LIST_NAME,
            Self::Named(name) => name,
        }
    }

    /// Path that renders this list, percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Self::Today => "/".to_owned(),
            Self::Named(name) => format!("/{}", urlencoding::encode(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_reserved() {
        assert_eq!(ListTarget::from_name("Today"), ListTarget::Today);
        assert_eq!(ListTarget::from_name(""), ListTarget::Today);
    }

    #[test]
    fn reserved_name_is_case_sensitive() {
        assert_eq!(
            ListTarget::from_name("today"),
            ListTarget::Named("today".into())
        );
    }

    #[test]
    fn paths_are_encoded() {
        assert_eq!(ListTarget::Today.path(), "/");
        assert_eq!(
            ListTarget::from_name("groceries").path(),
            "/groceries"
        );
        assert_eq!(
            ListTarget::from_name("work stuff").path(),
            "/work%20stuff"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(ListTarget::Today.title(), "Today");
        assert_eq!(ListTarget::from_name("groceries").title(), "groceries");
    }
}
