use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Writes `text` to the system clipboard. Returns `false` when the browser does
/// not expose `navigator.clipboard` (e.g. insecure origins).
pub fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let Ok(clipboard) = Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());

    match write_text {
        Some(write_text) => write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .is_ok(),
        None => false,
    }
}
