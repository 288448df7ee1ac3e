#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

//! Browser tests for the exported callables.
//!
//! Run:
//!   wasm-pack test --headless --firefox crates/emojify-web

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use emojify_web::{emojify_element, emojify_my_text, emojize_text};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> JsValue {
    Reflect::get(&js_sys::global(), &"document".into()).expect("document global")
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> JsValue {
    let f: Function = Reflect::get(target, &method.into())
        .expect("method lookup")
        .dyn_into()
        .expect("method is a function");
    f.apply(target, &args.iter().cloned().collect::<Array>())
        .expect("method call")
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &key.into()).expect("property read")
}

fn set(target: &JsValue, key: &str, value: &str) {
    Reflect::set(target, &key.into(), &JsValue::from_str(value)).expect("property write");
}

/// Append a `<tag id=id>` to the body and return it.
fn mount(tag: &str, id: &str) -> JsValue {
    let doc = document();
    let node = call(&doc, "createElement", &[JsValue::from_str(tag)]);
    set(&node, "id", id);
    let body = get(&doc, "body");
    call(&body, "appendChild", &[node.clone()]);
    node
}

fn unmount(node: &JsValue) {
    call(node, "remove", &[]);
}

#[wasm_bindgen_test]
fn emojify_my_text_rewrites_the_text_area() {
    let node = mount("textarea", "my_text_area");
    set(&node, "value", "ship :rocket: today");

    emojify_my_text();

    assert_eq!(get(&node, "value").as_string().as_deref(), Some("ship 🚀 today"));
    unmount(&node);
}

#[wasm_bindgen_test]
fn missing_element_is_a_no_op() {
    assert!(!emojify_element("emojify-test-absent"));
}

#[wasm_bindgen_test]
fn element_without_value_is_left_alone() {
    let node = mount("div", "emojify-test-div");
    set(&node, "textContent", ":rocket:");

    assert!(!emojify_element("emojify-test-div"));

    assert_eq!(get(&node, "textContent").as_string().as_deref(), Some(":rocket:"));
    unmount(&node);
}

#[wasm_bindgen_test]
fn input_elements_work_too() {
    let node = mount("input", "emojify-test-input");
    set(&node, "value", "hello world");

    assert!(emojify_element("emojify-test-input"));

    assert_eq!(get(&node, "value").as_string().as_deref(), Some("hello world"));
    unmount(&node);
}

#[wasm_bindgen_test]
fn emojify_text_is_pure() {
    assert_eq!(emojize_text(":tada: :qjqj:"), "🎉 :qjqj:");
}
