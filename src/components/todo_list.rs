//! To-do List Component
//!
//! Owns the item store and turns row requests into store updates.
//! Drag-and-drop goes through leptos-dragdrop; rows only arm themselves.

use leptos::prelude::*;
use leptos_dragdrop::bind_global_listeners;
use reactive_stores::Store;

use crate::components::ListItemRow;
use crate::context::use_list_context;
use crate::models::{Item, ItemId};
use crate::row::AddRequest;
use crate::store::{
    store_add_item, store_change_focus, store_move_item, store_remove_item, store_update_item,
    ListState, ListStateStoreFields,
};

/// Reorderable list of to-do rows
#[component]
pub fn TodoList(initial: Vec<Item>) -> impl IntoView {
    let ctx = use_list_context();
    let store = Store::new(ListState::new(initial));
    provide_context(store);

    let drag_options = ctx.config.with_value(|c| c.drag_options());
    bind_global_listeners(ctx.dnd, drag_options, move |id: ItemId, shift| {
        store_move_item(&store, id, shift);
    });

    let items = Signal::derive(move || store.items().get());
    let focus = Signal::derive(move || store.focus().get());

    let add_item = Callback::new(move |request: AddRequest| store_add_item(&store, request));
    let on_update_item = Callback::new(move |item: Item| store_update_item(&store, item));
    let on_remove_item = Callback::new(move |id: ItemId| store_remove_item(&store, id));
    let change_focus = Callback::new(move |target: Option<usize>| store_change_focus(&store, target));

    // Rows are keyed by position as well as id so that a row always
    // knows its current index after inserts and reorders.
    let rows = move || {
        items.with(|list| {
            list.iter()
                .enumerate()
                .map(|(index, item)| (index, item.id))
                .collect::<Vec<_>>()
        })
    };

    let append_item = move |_: web_sys::MouseEvent| {
        let last = items.with_untracked(|list| list.len().checked_sub(1));
        add_item.run(AddRequest::One {
            item: Item::draft(),
            cursor: None,
            at_index: last,
        });
    };

    let open_count = move || items.with(|list| list.iter().filter(|i| !i.is_complete).count());
    let done = move || {
        items.with(|list| {
            list.iter()
                .filter(|i| i.is_complete)
                .map(|i| i.name.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="todo-list-wrapper">
            <ul class="todo-list">
                <For
                    each=rows
                    key=|entry| *entry
                    children=move |(index, _)| {
                        view! {
                            <ListItemRow
                                items=items
                                item_index=index
                                focus=focus
                                add_item=add_item
                                on_update_item=on_update_item
                                on_remove_item=on_remove_item
                                change_focus=change_focus
                            />
                        }
                    }
                />
            </ul>

            <button class="add-item-btn" on:click=append_item>"+ Add item"</button>

            <p class="item-count">
                {move || format!("{} open, {} done", open_count(), done().len())}
            </p>

            <ul class="done-list">
                {move || done().into_iter().map(|name| view! { <li class="done-item">{name}</li> }).collect_view()}
            </ul>
        </div>
    }
}
