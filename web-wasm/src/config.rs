//! Backend origin wiring
//!
//! The hosting page may set `window.CLEF_BACKEND_ORIGIN` before the WASM
//! bundle loads; anything missing or malformed falls back to the default
//! origin.

use clef_common::BackendConfig;
use gloo::console;
use wasm_bindgen::JsValue;

/// Global the hosting page uses to point the app at another backend
pub const ORIGIN_GLOBAL: &str = "CLEF_BACKEND_ORIGIN";

/// Resolve the backend configuration for this page load.
pub fn backend_config() -> BackendConfig {
    let Some(window) = web_sys::window() else {
        return BackendConfig::default();
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(ORIGIN_GLOBAL)).ok();
    match value.and_then(|v| v.as_string()) {
        Some(origin) => match BackendConfig::parse(&origin) {
            Ok(config) => config,
            Err(e) => {
                console::warn!(format!("Ignoring {}: {}", ORIGIN_GLOBAL, e));
                BackendConfig::default()
            }
        },
        None => BackendConfig::default(),
    }
}
