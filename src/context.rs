//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{create_drag_signals, DragSignals};

use crate::config::RowConfig;
use crate::focus::FocusRegistry;
use crate::models::ItemId;

pub type InputRegistry = FocusRegistry<NodeRef<html::Input>>;

/// List-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Row tuning
    pub config: StoredValue<RowConfig>,
    /// Text inputs of rendered rows, by row position
    pub registry: StoredValue<InputRegistry>,
    /// Drag state shared by all rows
    pub dnd: DragSignals<ItemId>,
}

impl ListContext {
    pub fn new(config: RowConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            registry: StoredValue::new(InputRegistry::new()),
            dnd: create_drag_signals(),
        }
    }

    pub fn activation_key(&self) -> String {
        self.config.with_value(|c| c.activation_key.clone())
    }
}

pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
