//! Focus Handling
//!
//! The focus handshake between the list and its rows, and the ordered
//! registry used for arrow-key navigation between rendered rows.

use std::collections::BTreeMap;

use crate::models::ItemId;

/// Direction of keyboard navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// True when the pending focus request targets this row.
/// `None` is the "no pending focus" value and never matches.
pub fn claims_focus(pending: Option<usize>, index: usize) -> bool {
    pending == Some(index)
}

/// Consume a pending request for `index`, leaving `None` behind
pub fn acknowledge(pending: &mut Option<usize>, index: usize) -> bool {
    if claims_focus(*pending, index) {
        *pending = None;
        true
    } else {
        false
    }
}

/// Answer a pending request for `index` by running `focus`. The reply for
/// the list comes back only when `focus` succeeded; otherwise the request
/// stays pending for a later attempt.
pub fn take_focus(pending: Option<usize>, index: usize, focus: impl FnOnce() -> bool) -> Option<Option<usize>> {
    let mut pending = pending;
    if !claims_focus(pending, index) || !focus() {
        return None;
    }
    acknowledge(&mut pending, index);
    Some(pending)
}

/// Focusable handles of rendered rows keyed by row position.
/// Hidden rows are simply absent, so neighbours skip over them.
#[derive(Debug, Clone)]
pub struct FocusRegistry<H> {
    rows: BTreeMap<usize, (ItemId, H)>,
}

impl<H> Default for FocusRegistry<H> {
    fn default() -> Self {
        Self { rows: BTreeMap::new() }
    }
}

impl<H> FocusRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, position: usize, id: ItemId, handle: H) {
        self.rows.insert(position, (id, handle));
    }

    /// Remove the entry at `position` if it still belongs to `id`.
    /// A row re-created at the same position may have registered first.
    pub fn unregister(&mut self, position: usize, id: ItemId) {
        if self.rows.get(&position).is_some_and(|(owner, _)| *owner == id) {
            self.rows.remove(&position);
        }
    }

    /// Handle of the nearest rendered row above or below `position`
    pub fn neighbor(&self, position: usize, direction: Direction) -> Option<&H> {
        let entry = match direction {
            Direction::Up => self.rows.range(..position).next_back(),
            Direction::Down => self.rows.range(position.saturating_add(1)..).next(),
        };
        entry.map(|(_, (_, handle))| handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(positions: &[usize]) -> FocusRegistry<&'static str> {
        const NAMES: [&str; 6] = ["r0", "r1", "r2", "r3", "r4", "r5"];
        let mut reg = FocusRegistry::new();
        for &p in positions {
            reg.register(p, ItemId::new(), NAMES[p]);
        }
        reg
    }

    #[test]
    fn test_handshake_focuses_exactly_one_row_once() {
        let mut pending = Some(2);
        let mut focused = Vec::new();
        // Every row checks on each render pass; run two passes
        for _ in 0..2 {
            for index in 0..4 {
                if acknowledge(&mut pending, index) {
                    focused.push(index);
                }
            }
        }
        assert_eq!(focused, vec![2]);
        assert_eq!(pending, None);
    }

    #[test]
    fn test_no_pending_focus_claims_nothing() {
        let mut pending = None;
        assert!((0..5).all(|i| !acknowledge(&mut pending, i)));
        assert!(!claims_focus(None, 0));
    }

    #[test]
    fn test_neighbors_in_row_order() {
        let reg = registry(&[0, 1, 2]);
        assert_eq!(reg.neighbor(1, Direction::Up), Some(&"r0"));
        assert_eq!(reg.neighbor(1, Direction::Down), Some(&"r2"));
    }

    #[test]
    fn test_navigation_edges_are_none() {
        let reg = registry(&[0, 1, 2]);
        assert_eq!(reg.neighbor(0, Direction::Up), None);
        assert_eq!(reg.neighbor(2, Direction::Down), None);
    }

    #[test]
    fn test_failed_focus_leaves_request_pending() {
        // Input not mounted yet: no reply, nothing consumed
        assert_eq!(take_focus(Some(2), 2, || false), None);
        // Mounted and focused on the retry
        assert_eq!(take_focus(Some(2), 2, || true), Some(None));
    }

    #[test]
    fn test_other_rows_never_try_to_focus() {
        let mut attempted = false;
        assert_eq!(take_focus(Some(2), 1, || { attempted = true; true }), None);
        assert_eq!(take_focus(None, 1, || { attempted = true; true }), None);
        assert!(!attempted);
    }

    #[test]
    fn test_hidden_rows_are_skipped() {
        // Row 2 is completed and not rendered
        let reg = registry(&[0, 1, 3, 5]);
        assert_eq!(reg.neighbor(1, Direction::Down), Some(&"r3"));
        assert_eq!(reg.neighbor(3, Direction::Up), Some(&"r1"));
        assert_eq!(reg.neighbor(5, Direction::Down), None);
    }

    #[test]
    fn test_unregister_ignores_other_owner() {
        let mut reg = FocusRegistry::new();
        let old = ItemId::new();
        let new = ItemId::new();
        reg.register(0, new, "new");
        reg.unregister(0, old);
        assert_eq!(reg.neighbor(1, Direction::Up), Some(&"new"));
        reg.unregister(0, new);
        assert_eq!(reg.neighbor(1, Direction::Up), None);
    }

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
