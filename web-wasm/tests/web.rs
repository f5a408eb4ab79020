//! Browser-side smoke tests (run with `wasm-pack test --headless --chrome`)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use clef_wasm::config::{backend_config, ORIGIN_GLOBAL};

wasm_bindgen_test_configure!(run_in_browser);

fn set_origin_global(value: Option<&str>) {
    let window = web_sys::window().expect("window");
    match value {
        Some(origin) => {
            js_sys::Reflect::set(
                &window,
                &JsValue::from_str(ORIGIN_GLOBAL),
                &JsValue::from_str(origin),
            )
            .expect("set global");
        }
        None => {
            js_sys::Reflect::delete_property(&window, &JsValue::from_str(ORIGIN_GLOBAL))
                .expect("delete global");
        }
    }
}

#[wasm_bindgen_test]
fn defaults_without_global() {
    set_origin_global(None);
    let config = backend_config();
    assert_eq!(config.chat_url(), "http://localhost:8000/chat");
}

#[wasm_bindgen_test]
fn reads_window_global() {
    set_origin_global(Some("https://clef.example.org"));
    let config = backend_config();
    assert_eq!(config.upload_url(), "https://clef.example.org/upload");
    set_origin_global(None);
}

#[wasm_bindgen_test]
fn malformed_global_falls_back() {
    set_origin_global(Some("not a url"));
    let config = backend_config();
    assert_eq!(config.origin(), "http://localhost:8000");
    set_origin_global(None);
}
