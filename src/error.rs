//! UI Errors
//!
//! Failures from browser interop. None of them reach the user; call sites
//! log them and carry on.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// Clipboard data missing or unreadable
    Clipboard(String),
    /// Element refused focus or was not mounted
    Focus(String),
    /// Caret position could not be read or set
    Selection(String),
    /// Page configuration could not be parsed
    Config(String),
}

impl UiError {
    pub(crate) fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            UiError::Focus(msg) => write!(f, "Focus error: {}", msg),
            UiError::Selection(msg) => write!(f, "Selection error: {}", msg),
            UiError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}
