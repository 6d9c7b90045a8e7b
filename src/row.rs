//! Row Logic
//!
//! What a list row decides on its own: whether it renders, how its draft
//! text relates to the committed name, and which requests it sends to the
//! list. No DOM access here.

use crate::models::{Item, ItemId};

/// Request to insert new items, sent from a row to the list
#[derive(Debug, Clone, PartialEq)]
pub enum AddRequest {
    /// A single new item. With `at_index` the list inserts it after that
    /// row, and with a `cursor` it also moves the text after the caret
    /// (UTF-16 offset) into the new item.
    One {
        item: Item,
        cursor: Option<u32>,
        at_index: Option<usize>,
    },
    /// Several items from a paste, in reverse of their pasted order
    Batch(Vec<Item>),
}

/// Item the row at `index` renders, if any.
/// Completed items and stale indexes render nothing.
pub fn resolve_row(items: &[Item], index: usize) -> Option<&Item> {
    items.get(index).filter(|item| !item.is_complete)
}

/// Request sent when the activation key is pressed at caret `cursor`
pub fn enter_request(cursor: u32, index: usize) -> AddRequest {
    AddRequest::One {
        item: Item::draft(),
        cursor: Some(cursor),
        at_index: Some(index),
    }
}

/// Turn pasted text into new items: one per non-blank line, reversed so
/// that inserting each at the same position restores the pasted order.
pub fn paste_batch(text: &str) -> Vec<Item> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .rev()
        .map(Item::new)
        .collect()
}

/// Row lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPhase {
    Editing,
    /// Drag handle hovered or touched
    Draggable,
    /// Completed or removed; terminal for this row
    Hidden,
}

impl RowPhase {
    pub fn is_visible(self) -> bool {
        self != RowPhase::Hidden
    }
}

/// Render-local state of one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowDraft {
    text: String,
    synced: String,
    phase: RowPhase,
}

impl RowDraft {
    pub fn new(committed: &str) -> Self {
        Self {
            text: committed.to_string(),
            synced: committed.to_string(),
            phase: RowPhase::Editing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> RowPhase {
        self.phase
    }

    /// Pull an external rename into the draft. Only a change of the
    /// committed name overwrites the draft, so typing is never clobbered.
    pub fn sync(&mut self, committed: &str) -> bool {
        if self.synced == committed {
            return false;
        }
        self.synced = committed.to_string();
        self.text = committed.to_string();
        true
    }

    /// A keystroke. Emptying the field asks for removal and hides the row.
    pub fn input(&mut self, value: String, item: &Item) -> Option<ItemId> {
        if self.phase == RowPhase::Hidden {
            return None;
        }
        if value.is_empty() {
            self.phase = RowPhase::Hidden;
            return Some(item.id);
        }
        self.text = value;
        None
    }

    /// Update to send when the field loses focus, if the text changed.
    /// The sent text becomes the synced name, so a later edit of the
    /// committed name by the list (an Enter split) still reaches the draft.
    pub fn commit(&mut self, item: &Item) -> Option<Item> {
        if self.phase == RowPhase::Hidden || self.text == item.name {
            return None;
        }
        self.synced = self.text.clone();
        Some(Item {
            name: self.text.clone(),
            ..item.clone()
        })
    }

    /// Checkbox ticked
    pub fn complete(&mut self, item: &Item) -> Option<Item> {
        if self.phase == RowPhase::Hidden {
            return None;
        }
        self.phase = RowPhase::Hidden;
        self.synced = self.text.clone();
        Some(Item {
            name: self.text.clone(),
            is_complete: true,
            ..item.clone()
        })
    }

    /// Delete icon clicked
    pub fn remove(&mut self, item: &Item) -> Option<ItemId> {
        if self.phase == RowPhase::Hidden {
            return None;
        }
        self.phase = RowPhase::Hidden;
        Some(item.id)
    }

    pub fn arm(&mut self) {
        if self.phase == RowPhase::Editing {
            self.phase = RowPhase::Draggable;
        }
    }

    pub fn disarm(&mut self) {
        if self.phase == RowPhase::Draggable {
            self.phase = RowPhase::Editing;
        }
    }
}
