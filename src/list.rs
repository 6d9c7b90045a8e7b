//! List Operations
//!
//! How the list container applies the requests its rows send. The list
//! is the only writer of the item vector.

use crate::models::{Item, ItemId};
use crate::row::AddRequest;

/// Convert a UTF-16 caret offset (as the DOM reports it) into a byte index
/// on a char boundary, clamped to the end of the text.
pub fn utf16_to_byte_idx(s: &str, pos_utf16: u32) -> usize {
    let mut acc: u32 = 0;
    for (i, ch) in s.char_indices() {
        if acc >= pos_utf16 {
            return i;
        }
        acc += ch.len_utf16() as u32;
    }
    s.len()
}

/// Insert the requested item(s). Returns the row that should take focus.
pub fn apply_add(items: &mut Vec<Item>, request: AddRequest) -> Option<usize> {
    match request {
        AddRequest::One { mut item, cursor, at_index } => {
            let Some(index) = at_index.filter(|&i| i < items.len()) else {
                items.insert(0, item);
                return Some(0);
            };
            if let Some(cursor) = cursor {
                let name = &mut items[index].name;
                let split = utf16_to_byte_idx(name, cursor);
                let tail = name.split_off(split);
                item.name.insert_str(0, &tail);
            }
            items.insert(index + 1, item);
            Some(index + 1)
        }
        AddRequest::Batch(batch) => {
            for item in batch {
                items.insert(0, item);
            }
            None
        }
    }
}

/// Replace the item with the same id
pub fn apply_update(items: &mut [Item], updated: Item) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(item) => {
            *item = updated;
            true
        }
        None => false,
    }
}

/// Remove the item with this id
pub fn apply_remove(items: &mut Vec<Item>, id: ItemId) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Move an item `shift` rendered rows up (negative) or down (positive).
/// Completed items are not rendered, so they are stepped over.
pub fn move_visible(items: &mut Vec<Item>, id: ItemId, shift: isize) -> bool {
    let visible: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_complete)
        .map(|(i, _)| i)
        .collect();
    let Some(pos) = visible.iter().position(|&i| items[i].id == id) else {
        return false;
    };
    let target = (pos as isize + shift).clamp(0, visible.len() as isize - 1) as usize;
    if target == pos {
        return false;
    }
    let from = visible[pos];
    let to = visible[target];
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{enter_request, paste_batch, RowDraft};

    fn list(names: &[&str]) -> Vec<Item> {
        names.iter().map(|n| Item::new(*n)).collect()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_enter_after_typing_splits_typed_text() {
        let mut items = list(&["hello"]);
        let mut draft = RowDraft::new("hello");
        draft.input("hello world".to_string(), &items[0]);

        // Enter: commit the draft, then ask for the split
        let updated = draft.commit(&items[0]).unwrap();
        assert!(apply_update(&mut items, updated));
        assert_eq!(apply_add(&mut items, enter_request(5, 0)), Some(1));

        // Sync effect, then blur as focus moves to the new row
        let head = items[0].clone();
        draft.sync(&head.name);
        if let Some(stale) = draft.commit(&head) {
            apply_update(&mut items, stale);
        }
        assert_eq!(names(&items), vec!["hello", " world"]);
    }

    #[test]
    fn test_enter_splits_at_caret() {
        let mut items = list(&["a", "hello world", "z"]);
        let focus = apply_add(&mut items, enter_request(5, 1));
        assert_eq!(names(&items), vec!["a", "hello", " world", "z"]);
        assert_eq!(focus, Some(2));
    }

    #[test]
    fn test_enter_at_end_adds_empty_item() {
        let mut items = list(&["buy milk"]);
        apply_add(&mut items, enter_request(8, 0));
        assert_eq!(names(&items), vec!["buy milk", ""]);
    }

    #[test]
    fn test_caret_beyond_text_is_clamped() {
        let mut items = list(&["abc"]);
        apply_add(&mut items, enter_request(99, 0));
        assert_eq!(names(&items), vec!["abc", ""]);
    }

    #[test]
    fn test_caret_counts_utf16_units() {
        // '😀' is two UTF-16 units and four bytes
        assert_eq!(utf16_to_byte_idx("😀x", 2), 4);
        assert_eq!(utf16_to_byte_idx("é!", 1), 2);
        assert_eq!(utf16_to_byte_idx("abc", 0), 0);
        let mut items = list(&["😀tail"]);
        apply_add(&mut items, enter_request(2, 0));
        assert_eq!(names(&items), vec!["😀", "tail"]);
    }

    #[test]
    fn test_add_without_index_goes_to_front() {
        let mut items = list(&["a"]);
        let focus = apply_add(
            &mut items,
            AddRequest::One { item: Item::new("new"), cursor: None, at_index: None },
        );
        assert_eq!(names(&items), vec!["new", "a"]);
        assert_eq!(focus, Some(0));
    }

    #[test]
    fn test_add_after_row_without_split() {
        let mut items = list(&["a", "b"]);
        let focus = apply_add(
            &mut items,
            AddRequest::One { item: Item::draft(), cursor: None, at_index: Some(1) },
        );
        assert_eq!(names(&items), vec!["a", "b", ""]);
        assert_eq!(focus, Some(2));
    }

    #[test]
    fn test_batch_restores_paste_order() {
        let mut items = list(&["existing"]);
        let focus = apply_add(&mut items, AddRequest::Batch(paste_batch("a\nb\n\nc")));
        assert_eq!(names(&items), vec!["a", "b", "c", "existing"]);
        assert_eq!(focus, None);
    }

    #[test]
    fn test_update_and_remove_by_id() {
        let mut items = list(&["a", "b"]);
        let mut changed = items[1].clone();
        changed.is_complete = true;
        assert!(apply_update(&mut items, changed));
        assert!(items[1].is_complete);

        let gone = items[0].id;
        assert!(apply_remove(&mut items, gone));
        assert!(!apply_remove(&mut items, gone));
        assert_eq!(names(&items), vec!["b"]);
        assert!(!apply_update(&mut items, Item::new("stranger")));
    }

    #[test]
    fn test_move_keeps_identity() {
        let mut items = list(&["a", "b", "c", "d"]);
        let ids: Vec<_> = items.iter().map(|i| (i.id, i.name.clone())).collect();
        assert!(move_visible(&mut items, ids[0].0, 2));
        assert_eq!(names(&items), vec!["b", "c", "a", "d"]);
        for (id, name) in ids {
            assert_eq!(items.iter().find(|i| i.id == id).unwrap().name, name);
        }
    }

    #[test]
    fn test_move_up_and_clamp() {
        let mut items = list(&["a", "b", "c"]);
        let c = items[2].id;
        assert!(move_visible(&mut items, c, -10));
        assert_eq!(names(&items), vec!["c", "a", "b"]);
        assert!(!move_visible(&mut items, c, -1));
    }

    #[test]
    fn test_move_steps_over_completed_items() {
        let mut items = list(&["a", "done", "b"]);
        items[1].is_complete = true;
        let a = items[0].id;
        assert!(move_visible(&mut items, a, 1));
        assert_eq!(names(&items), vec!["done", "b", "a"]);
    }
}
