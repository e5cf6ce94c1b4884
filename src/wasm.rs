//! WASM bindings for binding pages in the browser or at the edge.
//!
//! This module exposes [`crate::bind_html`] to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Bind a content document (JSON text) onto a page skeleton (HTML text).
///
/// Returns the bound page, or an error string if the content document could
/// not be parsed.
#[wasm_bindgen]
pub fn bind_page(skeleton: &str, content_json: &str) -> Result<String, JsValue> {
    crate::bind_html(skeleton, content_json).map_err(|e| JsValue::from_str(&e.to_string()))
}
