//! UI Components
//!
//! Reusable Leptos components.

mod list_item_row;
mod todo_list;

pub use list_item_row::ListItemRow;
pub use todo_list::TodoList;
