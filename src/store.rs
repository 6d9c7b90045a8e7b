//! List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single owner of the item vector; rows only send requests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Item, ItemId};
use crate::row::AddRequest;

/// State owned by the list container
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// All items, open and completed, in display order
    pub items: Vec<Item>,
    /// Row that should take keyboard focus once (None = no pending focus)
    pub focus: Option<usize>,
}

impl ListState {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, focus: None }
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

// ========================
// Store Helper Functions
// ========================

/// Insert new item(s) and hand focus to the row the list picked
pub fn store_add_item(store: &ListStore, request: AddRequest) {
    let target = list::apply_add(&mut store.items().write(), request);
    tracing::debug!("add: focus -> {:?}", target);
    if target.is_some() {
        store.focus().set(target);
    }
}

/// Update an item in the store by ID
pub fn store_update_item(store: &ListStore, updated_item: Item) {
    let id = updated_item.id;
    if !list::apply_update(&mut store.items().write(), updated_item) {
        tracing::debug!("update: item {} already gone", id);
    }
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &ListStore, item_id: ItemId) {
    if list::apply_remove(&mut store.items().write(), item_id) {
        tracing::debug!("removed item {}", item_id);
    }
}

/// Move an item by a number of rendered rows
pub fn store_move_item(store: &ListStore, item_id: ItemId, shift: isize) {
    if list::move_visible(&mut store.items().write(), item_id, shift) {
        tracing::info!("moved item {} by {} rows", item_id, shift);
    }
}

/// Set or clear the pending focus request
pub fn store_change_focus(store: &ListStore, focus: Option<usize>) {
    store.focus().set(focus);
}
