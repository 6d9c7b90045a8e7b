//! List Item Row Component
//!
//! One editable to-do row: drag handle, checkbox, text field, delete icon.
//! The row never writes the item list; every change is a request to the
//! list through the callbacks.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{arm, disarm, make_on_mousedown, make_on_touchstart, offset_for};

use crate::context::use_list_context;
use crate::dom;
use crate::focus::{take_focus, Direction};
use crate::models::{Item, ItemId};
use crate::row::{enter_request, paste_batch, resolve_row, AddRequest, RowDraft, RowPhase};
use crate::shadow::row_style;

/// A single reorderable to-do row.
///
/// Renders nothing when `items[item_index]` is missing or completed.
/// `focus` is the list's pending focus request; the row that matches it
/// focuses its input and answers with `change_focus(None)`.
#[component]
pub fn ListItemRow(
    #[prop(into)] items: Signal<Vec<Item>>,
    item_index: usize,
    #[prop(into)] focus: Signal<Option<usize>>,
    #[prop(into)] add_item: Callback<AddRequest>,
    #[prop(into)] on_update_item: Callback<Item>,
    #[prop(into)] on_remove_item: Callback<ItemId>,
    #[prop(into)] change_focus: Callback<Option<usize>>,
) -> impl IntoView {
    let ctx = use_list_context();
    let dnd = ctx.dnd;
    let activation_key = ctx.activation_key();

    let Some(row_id) = items.with_untracked(|list| list.get(item_index).map(|item| item.id)) else {
        return ().into_any();
    };

    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let initial_name = items.with_untracked(|list| list[item_index].name.clone());
    let draft = RwSignal::new(RowDraft::new(&initial_name));

    // Current item, only while it still sits at this index
    let current = move || {
        items.with_untracked(|list| {
            resolve_row(list, item_index)
                .filter(|item| item.id == row_id)
                .cloned()
        })
    };
    let is_visible = move || {
        let listed = items.with(|list| resolve_row(list, item_index).is_some_and(|item| item.id == row_id));
        listed && draft.with(|d| d.phase().is_visible())
    };

    // One-way sync of the committed name into the draft
    Effect::new(move |_| {
        let committed = items.with(|list| {
            list.get(item_index)
                .filter(|item| item.id == row_id)
                .map(|item| item.name.clone())
        });
        if let Some(name) = committed {
            draft.update(|d| {
                d.sync(&name);
            });
        }
    });

    // Focus handshake. The request stays pending until the input is
    // mounted and focused, so a late mount still answers it.
    Effect::new(move |_| {
        let pending = focus.get();
        let mounted = input_ref.get();
        let reply = take_focus(pending, item_index, || {
            let Some(el) = mounted else { return false; };
            dom::focus_input(&el)
                .map_err(|e| tracing::warn!("row {}: {}", item_index, e))
                .is_ok()
        });
        if let Some(reply) = reply {
            change_focus.run(reply);
        }
    });

    // Keep the navigation registry in step with visibility
    Effect::new(move |_| {
        let mounted = input_ref.get().is_some();
        let visible = is_visible();
        ctx.registry.update_value(|reg| {
            if mounted && visible {
                reg.register(item_index, row_id, input_ref);
            } else {
                reg.unregister(item_index, row_id);
            }
        });
    });
    on_cleanup(move || ctx.registry.update_value(|reg| reg.unregister(item_index, row_id)));

    // Drag phase follows the shared armed id
    Effect::new(move |_| {
        let armed = dnd.armed_id_read.get() == Some(row_id);
        draft.update(|d| if armed { d.arm() } else { d.disarm() });
    });

    let commit_draft = move || {
        let Some(item) = current() else { return; };
        let mut updated = None;
        draft.update(|d| updated = d.commit(&item));
        if let Some(updated) = updated {
            on_update_item.run(updated);
        }
    };

    let on_input = move |value: String| {
        let Some(item) = current() else { return; };
        let mut removal = None;
        draft.update(|d| removal = d.input(value, &item));
        if let Some(id) = removal {
            on_remove_item.run(id);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == activation_key {
            ev.prevent_default();
            let Some(el) = input_ref.get_untracked() else { return; };
            let cursor = dom::caret_position(&el).unwrap_or_else(|e| {
                tracing::warn!("row {}: {}", item_index, e);
                el.value().encode_utf16().count() as u32
            });
            commit_draft();
            add_item.run(enter_request(cursor, item_index));
            return;
        }
        let Some(direction) = Direction::from_key(&key) else { return; };
        ev.prevent_default();
        let target = ctx.registry.with_value(|reg| reg.neighbor(item_index, direction).copied());
        let Some(el) = target.and_then(|node| node.get_untracked()) else { return; };
        if let Err(e) = dom::focus_input(&el) {
            tracing::warn!("row {}: {}", item_index, e);
            return;
        }
        if direction == Direction::Down {
            dom::set_caret_next_tick(el, 0);
        }
    };

    let on_paste = move |ev: web_sys::ClipboardEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        commit_draft();
        match dom::clipboard_text(&ev) {
            Ok(text) => {
                let batch = paste_batch(&text);
                if !batch.is_empty() {
                    add_item.run(AddRequest::Batch(batch));
                }
            }
            Err(e) => tracing::warn!("row {}: {}", item_index, e),
        }
        change_focus.run(None);
    };

    let on_complete = move |_: web_sys::Event| {
        let Some(item) = current() else { return; };
        let mut completed = None;
        draft.update(|d| completed = d.complete(&item));
        if let Some(updated) = completed {
            on_update_item.run(updated);
        }
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let Some(item) = current() else { return; };
        let mut removal = None;
        draft.update(|d| removal = d.remove(&item));
        if let Some(id) = removal {
            on_remove_item.run(id);
        }
    };

    let on_mousedown = make_on_mousedown(dnd, row_id);
    let on_touchstart = make_on_touchstart(dnd, row_id);

    let row_class = move || match draft.with(|d| d.phase()) {
        RowPhase::Draggable => "todo-row draggable",
        _ => "todo-row",
    };

    view! {
        <Show when=is_visible>
            <li
                class=row_class
                style=move || row_style(offset_for(&dnd, row_id))
                on:mousedown=on_mousedown
            >
                <span
                    class="drag-handle"
                    on:mouseenter=move |_| arm(&dnd, row_id)
                    on:mouseleave=move |_| disarm(&dnd, row_id)
                    on:touchstart=on_touchstart
                >
                    "⠿"
                </span>
                <input type="checkbox" class="row-check" on:change=on_complete />
                <input
                    type="text"
                    class="row-text"
                    node_ref=input_ref
                    prop:value=move || draft.with(|d| d.text().to_string())
                    on:input=move |ev| on_input(event_target_value(&ev))
                    on:blur=move |_| commit_draft()
                    on:keydown=on_keydown.clone()
                    on:paste=on_paste
                />
                <button class="row-delete" on:click=on_delete>"×"</button>
            </li>
        </Show>
    }
    .into_any()
}
