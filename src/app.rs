//! To-do Frontend App
//!
//! Reads optional page configuration, provides the list context and mounts
//! the list.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::config::{RowConfig, CONFIG_ELEMENT_ID};
use crate::context::ListContext;
use crate::dom;
use crate::error::UiError;
use crate::models::Item;

/// Element id of the optional embedded seed list
pub const SEED_ELEMENT_ID: &str = "todo-seed";

fn load_config() -> RowConfig {
    let Some(json) = dom::page_json(CONFIG_ELEMENT_ID) else {
        return RowConfig::default();
    };
    RowConfig::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!("{}; using defaults", e);
        RowConfig::default()
    })
}

fn parse_seed(json: &str) -> Result<Vec<Item>, UiError> {
    Ok(serde_json::from_str(json)?)
}

fn default_seed() -> Vec<Item> {
    ["Buy milk", "Call the plumber", "Water the plants"]
        .into_iter()
        .map(Item::new)
        .collect()
}

fn load_seed() -> Vec<Item> {
    let Some(json) = dom::page_json(SEED_ELEMENT_ID) else {
        return default_seed();
    };
    parse_seed(&json).unwrap_or_else(|e| {
        tracing::warn!("seed list: {}", e);
        default_seed()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    tracing::debug!("row config: {:?}", config);
    provide_context(ListContext::new(config));

    let initial = load_seed();
    tracing::info!("loaded {} items", initial.len());

    view! {
        <main class="main-content">
            <h1>"To-do"</h1>
            <TodoList initial=initial />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses_names() {
        let items = parse_seed(r#"[{"name":"a"},{"name":"b","isComplete":true}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_complete);
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        assert!(matches!(parse_seed("{"), Err(UiError::Config(_))));
    }

    #[test]
    fn test_default_seed_is_open() {
        let seed = default_seed();
        assert_eq!(seed.len(), 3);
        assert!(seed.iter().all(|i| !i.is_complete));
    }
}
