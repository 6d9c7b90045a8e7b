//! Frontend Models
//!
//! To-do entries as held by the list container.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of an item, used as the reorder/diff key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            is_complete: false,
        }
    }

    /// Empty, incomplete item with a fresh id
    pub fn draft() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_is_empty_and_open() {
        let draft = Item::draft();
        assert!(draft.name.is_empty());
        assert!(!draft.is_complete);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::draft();
        let b = Item::draft();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_seed_json_uses_camel_case() {
        let json = r#"[{"name":"milk"},{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","name":"eggs","isComplete":true}]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "milk");
        assert!(!items[0].is_complete);
        assert!(items[1].is_complete);
        assert_eq!(items[1].id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
