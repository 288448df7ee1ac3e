//! `wasm-bindgen` exports.
//!
//! Only compiled on `wasm32` targets.

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use emojify_text::{DEFAULT_ELEMENT_ID, emojize};

use crate::dom::JsDocument;

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
}

/// Replace shortcodes in `#my_text_area` with emoji.
#[wasm_bindgen(js_name = emojifyMyText)]
pub fn emojify_my_text() {
    emojify_element(DEFAULT_ELEMENT_ID);
}

/// Replace shortcodes in the element with `id`.
///
/// Returns `true` when the element's value was written.
#[wasm_bindgen(js_name = emojifyElement)]
pub fn emojify_element(id: &str) -> bool {
    match JsDocument::from_global() {
        Ok(document) => crate::emojify_element_in(&document, id),
        Err(err) => {
            tracing::warn!(element_id = id, error = %err, "emojify abandoned after host error");
            false
        }
    }
}

/// Replace shortcodes in `text`.
#[wasm_bindgen(js_name = emojifyText)]
pub fn emojize_text(text: &str) -> String {
    emojize(text)
}
