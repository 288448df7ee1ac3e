#![forbid(unsafe_code)]

//! WASM exports that emojify a text box in the host page.
//!
//! The JS surface (compiled on `wasm32` only):
//!
//! | export | behavior |
//! |---|---|
//! | `emojifyMyText()` | rewrite `#my_text_area` in place, no return value |
//! | `emojifyElement(id)` | same for any id, returns whether a value was written |
//! | `emojifyText(text)` | the substitution routine alone |
//!
//! Host glue imports these from the generated module and wires
//! `emojifyMyText` to whatever UI event should trigger it. No failure ever
//! reaches the caller: missing elements and undefined values are no-ops, and
//! host errors are logged and dropped by [`emojify_element_in`].

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{JsDocument, JsElement};
#[cfg(target_arch = "wasm32")]
pub use wasm::{emojify_element, emojify_my_text, emojize_text};

use emojify_text::{BridgeConfig, Shortcodes, TextDocument, TextSubstitutionBridge};

/// Run the shortcode bridge against `element_id` in `document`.
///
/// Returns whether the element's value was written. Host errors are
/// absorbed here so the exported callables never throw.
pub fn emojify_element_in<D: TextDocument>(document: &D, element_id: &str) -> bool {
    let bridge = TextSubstitutionBridge::new(
        BridgeConfig::default().with_element_id(element_id),
        Shortcodes::default(),
    );
    match bridge.run(document) {
        Ok(outcome) => outcome.wrote(),
        Err(err) => {
            tracing::warn!(element_id, error = %err, "emojify abandoned after host error");
            false
        }
    }
}
