//! WASM build test
//!
//! Tests the browser environment and the JS-facing exports against a real DOM.

#![cfg(target_arch = "wasm32")]

use onboarding_wasm::api::*;
use onboarding_wasm::env::{BrowserEnvironment, GeometryAccessor, LocaleAccessor, ViewportAccessor};
use onboarding_wasm::{ItemStyle, OnboardingItem, Placement, Rect, ViewportSize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn absolute_div(left: f64, top: f64, width: f64, height: f64) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    div.set_attribute(
        "style",
        &format!(
            "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;margin:0;padding:0;border:0",
            left, top, width, height
        ),
    )
    .unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn test_browser_environment_has_window() {
    let env = BrowserEnvironment::new();
    assert!(env.has_window());

    let viewport = env.viewport_size();
    assert!(viewport.width > 0.0);
    assert!(viewport.height > 0.0);
    assert!(!env.locale().is_empty());
}

#[wasm_bindgen_test]
fn test_browser_element_rect() {
    let div = absolute_div(100.0, 100.0, 50.0, 20.0);
    let rect = BrowserEnvironment::new().rect(&div);
    assert_eq!(rect, Rect::new(100.0, 100.0, 50.0, 20.0));
    div.remove();
}

#[wasm_bindgen_test]
fn test_compute_position_export() {
    let target = serde_wasm_bindgen::to_value(&Rect::new(100.0, 100.0, 50.0, 20.0)).unwrap();
    let container = serde_wasm_bindgen::to_value(&Rect::new(0.0, 0.0, 200.0, 80.0)).unwrap();
    let viewport = serde_wasm_bindgen::to_value(&ViewportSize::new(1000.0, 800.0)).unwrap();

    let style = compute_item_style(target, container, viewport, Some("top".to_string())).unwrap();
    let style: ItemStyle = serde_wasm_bindgen::from_value(style).unwrap();
    assert_eq!(style.left, "125px");
    assert_eq!(style.top, "75px");
    assert_eq!(style.transform, "translate(-50%,-100%)");
}

#[wasm_bindgen_test]
fn test_compute_position_rejects_bad_rect() {
    let target = JsValue::from_str("not a rect");
    let container = serde_wasm_bindgen::to_value(&Rect::new(0.0, 0.0, 200.0, 80.0)).unwrap();
    let result = compute_position_js(target, container, JsValue::UNDEFINED, None);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_resolve_alignment_class_export() {
    assert_eq!(resolve_alignment_class_js(None), "");
    assert_eq!(resolve_alignment_class_js(Some("right".to_string())), "align-right");
}

#[wasm_bindgen_test]
fn test_get_item_style_export() {
    let target = absolute_div(100.0, 100.0, 50.0, 20.0);
    let tip = absolute_div(0.0, 0.0, 200.0, 80.0);
    let item = OnboardingItem::new("Save", "Click").with_position(Placement::Left);
    let item = serde_wasm_bindgen::to_value(&item).unwrap();

    let style = get_item_style(item, &target, &tip).unwrap();
    let style: ItemStyle = serde_wasm_bindgen::from_value(style).unwrap();
    assert_eq!(style.left, "75px");
    assert_eq!(style.transform, "translate(-100%,-50%)");

    target.remove();
    tip.remove();
}
