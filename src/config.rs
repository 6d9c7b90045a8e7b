//! Row Configuration
//!
//! Tuning read from an optional JSON block in the host page:
//! `<script type="application/json" id="todo-config">{...}</script>`.

use leptos_dragdrop::DragOptions;
use serde::Deserialize;

use crate::error::UiError;

/// Element id of the embedded config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowConfig {
    /// Movement before a press on the handle becomes a drag
    pub drag_threshold_px: f64,
    /// Sideways travel allowed while dragging
    pub max_lateral_px: f64,
    /// Rendered row height, used to map drag offset to rows
    pub row_height_px: f64,
    /// Key that creates a new item
    pub activation_key: String,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            max_lateral_px: 8.0,
            row_height_px: 44.0,
            activation_key: "Enter".to_string(),
        }
    }
}

impl RowConfig {
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn drag_options(&self) -> DragOptions {
        DragOptions {
            threshold_px: self.drag_threshold_px,
            max_lateral_px: self.max_lateral_px,
            row_height_px: self.row_height_px,
        }
    }
}
