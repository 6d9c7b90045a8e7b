//! DOM Helpers
//!
//! Thin wrappers over web-sys calls the row needs, returning `UiError`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;

use crate::error::UiError;

pub fn focus_input(el: &web_sys::HtmlInputElement) -> Result<(), UiError> {
    el.focus().map_err(|e| UiError::Focus(UiError::describe(&e)))
}

/// Caret offset in UTF-16 code units
pub fn caret_position(el: &web_sys::HtmlInputElement) -> Result<u32, UiError> {
    el.selection_start()
        .map_err(|e| UiError::Selection(UiError::describe(&e)))
        .map(|pos| pos.unwrap_or(0))
}

/// Move the caret on the next tick, once the element has taken focus
pub fn set_caret_next_tick(el: web_sys::HtmlInputElement, pos: u32) {
    Timeout::new(0, move || {
        if let Err(e) = el.set_selection_range(pos, pos) {
            tracing::warn!("{}", UiError::Selection(UiError::describe(&e)));
        }
    })
    .forget();
}

pub fn clipboard_text(ev: &web_sys::ClipboardEvent) -> Result<String, UiError> {
    let data = ev
        .clipboard_data()
        .ok_or_else(|| UiError::Clipboard("no clipboard data".to_string()))?;
    data.get_data("text")
        .map_err(|e| UiError::Clipboard(UiError::describe(&e)))
}

/// Text of an embedded `<script type="application/json" id=...>` block
pub fn page_json(element_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(element_id)?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .ok()?
        .text()
        .ok()
}
