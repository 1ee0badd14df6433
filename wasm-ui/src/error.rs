//! Errors raised while wiring the page.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum UiError {
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Net(#[from] gloo::net::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_message(&value))
    }
}

/// Best-effort text of a thrown JavaScript value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
