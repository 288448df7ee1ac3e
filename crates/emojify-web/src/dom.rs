//! `js-sys` backed host document.
//!
//! Goes through `Reflect` rather than `web-sys` bindings so the module stays
//! small and works with any object that has `getElementById` and `value`.

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use emojify_text::{HostError, HostOp, HostValue, TextDocument, TextElement};

fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn is_nullish(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// The page's `document`.
#[derive(Debug, Clone)]
pub struct JsDocument {
    document: JsValue,
}

impl JsDocument {
    /// Wrap `globalThis.document`.
    pub fn from_global() -> Result<Self, HostError> {
        let document = Reflect::get(&js_sys::global(), &"document".into())
            .map_err(|err| HostError::new(HostOp::Document, js_detail(&err)))?;
        if is_nullish(&document) {
            return Err(HostError::new(HostOp::Document, "no `document` global"));
        }
        Ok(Self { document })
    }
}

impl TextDocument for JsDocument {
    type Element = JsElement;

    fn element_by_id(&self, id: &str) -> Result<Option<JsElement>, HostError> {
        let lookup = Reflect::get(&self.document, &"getElementById".into())
            .map_err(|err| HostError::new(HostOp::Lookup, js_detail(&err)))?;
        let lookup = lookup.dyn_into::<Function>().map_err(|value| {
            HostError::new(
                HostOp::Lookup,
                format!("getElementById is not a function: {}", js_detail(&value)),
            )
        })?;
        let node = lookup
            .call1(&self.document, &JsValue::from_str(id))
            .map_err(|err| HostError::new(HostOp::Lookup, js_detail(&err)))?;
        if is_nullish(&node) {
            return Ok(None);
        }
        Ok(Some(JsElement { node }))
    }
}

/// An element returned by `getElementById`.
#[derive(Debug, Clone)]
pub struct JsElement {
    node: JsValue,
}

impl TextElement for JsElement {
    fn value(&self) -> Result<HostValue, HostError> {
        let value = Reflect::get(&self.node, &"value".into())
            .map_err(|err| HostError::new(HostOp::Read, js_detail(&err)))?;
        if is_nullish(&value) {
            return Ok(HostValue::Undefined);
        }
        Ok(value.as_string().map_or(HostValue::NotText, HostValue::Text))
    }

    fn set_value(&self, value: &str) -> Result<(), HostError> {
        let written = Reflect::set(&self.node, &"value".into(), &JsValue::from_str(value))
            .map_err(|err| HostError::new(HostOp::Write, js_detail(&err)))?;
        if !written {
            return Err(HostError::new(HostOp::Write, "`value` is not writable"));
        }
        Ok(())
    }
}
