//! Onboarding tip functions exported to JavaScript
//!
//! Geometry arguments are plain objects (`{x, y, width, height}`); a
//! `DOMRect` works too since it carries the same fields. Results come back as
//! plain objects.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, deserialize_optional, report, serialize};
use crate::env::{BrowserEnvironment, LocaleAccessor, ViewportAccessor};
use crate::error::OnboardingError;
use crate::layout::{compute_position, Position};
use crate::models::{LocalizedText, OnboardingItem, Placement, Rect, Size, ViewportSize};
use crate::presenter::ItemPresenter;
use crate::style::resolve_alignment_class;
use crate::text::resolve_text;
use crate::{wasm_info, wasm_log};

fn position_from_js(
    target_js: JsValue,
    container_js: JsValue,
    viewport_js: JsValue,
    placement: Option<String>,
) -> Result<Position, JsValue> {
    let target: Rect = deserialize(target_js, "Failed to deserialize target rect")?;
    let container: Size = deserialize(container_js, "Failed to deserialize container size")?;
    let viewport = deserialize_optional::<ViewportSize>(viewport_js, "Failed to deserialize viewport size")?
        .unwrap_or_else(|| BrowserEnvironment::new().viewport_size());
    let placement = Placement::from(placement);

    let position = compute_position(target, container, viewport, placement);
    wasm_log!(
        "computePosition: placement={} -> ({}, {}) {}",
        placement,
        position.x,
        position.y,
        position.transform
    );
    Ok(position)
}

/// Compute tip coordinates for a target rect
///
/// # Parameters
/// - `target_js`: target rect `{x, y, width, height}`
/// - `container_js`: tip size `{width, height}`
/// - `viewport_js`: screen size `{width, height}`, or `undefined` to sample it now
/// - `placement`: `top`, `right`, `left`, `topleft` or `bottom`; anything else means bottom
///
/// # Returns
/// `{x, y, transform}` where `transform` is a CSS transform string
#[wasm_bindgen(js_name = computePosition)]
pub fn compute_position_js(
    target_js: JsValue,
    container_js: JsValue,
    viewport_js: JsValue,
    placement: Option<String>,
) -> Result<JsValue, JsValue> {
    let position = position_from_js(target_js, container_js, viewport_js, placement)?;
    serialize(&position, "Failed to serialize position")
}

/// Same as `computePosition`, returned as `{left, top, transform}` style strings
#[wasm_bindgen(js_name = computeItemStyle)]
pub fn compute_item_style(
    target_js: JsValue,
    container_js: JsValue,
    viewport_js: JsValue,
    placement: Option<String>,
) -> Result<JsValue, JsValue> {
    let position = position_from_js(target_js, container_js, viewport_js, placement)?;
    serialize(&position.to_style(), "Failed to serialize item style")
}

/// Inline style for an onboarding item pointing at a live DOM element
///
/// Reads both elements' current layout and the screen size on every call.
#[wasm_bindgen(js_name = getItemStyle)]
pub fn get_item_style(
    item_js: JsValue,
    target: &Element,
    container: &Element,
) -> Result<JsValue, JsValue> {
    let item: OnboardingItem = deserialize(item_js, "Failed to deserialize onboarding item")?;

    let env = BrowserEnvironment::new();
    if !env.has_window() {
        return Err(report(OnboardingError::NoWindow));
    }

    let style = ItemPresenter::new(&item, &env).style(target, container);
    wasm_log!(
        "getItemStyle: position={} left={} top={}",
        item.position,
        style.left,
        style.top
    );
    serialize(&style, "Failed to serialize item style")
}

/// Pick localized headline/details for `language`
///
/// # Returns
/// `{headline, details}`; the fallback pair when no variant matches exactly
#[wasm_bindgen(js_name = resolveText)]
pub fn resolve_text_js(
    variants_js: JsValue,
    language: &str,
    fallback_headline: &str,
    fallback_details: &str,
) -> Result<JsValue, JsValue> {
    let variants: Vec<LocalizedText> =
        deserialize_optional(variants_js, "Failed to deserialize text variants")?.unwrap_or_default();

    let text = resolve_text(&variants, language, fallback_headline, fallback_details);
    serialize(&text, "Failed to serialize resolved text")
}

/// Headline/details of an onboarding item for the browser's language
#[wasm_bindgen(js_name = resolveItemText)]
pub fn resolve_item_text(item_js: JsValue) -> Result<JsValue, JsValue> {
    let item: OnboardingItem = deserialize(item_js, "Failed to deserialize onboarding item")?;

    let env = BrowserEnvironment::new();
    let text = ItemPresenter::new(&item, &env).text();
    wasm_log!("resolveItemText: locale={}", env.locale());
    serialize(&text, "Failed to serialize resolved text")
}

/// Class for the tip's text alignment (`""` for centered)
#[wasm_bindgen(js_name = resolveAlignmentClass)]
pub fn resolve_alignment_class_js(alignment: Option<String>) -> String {
    resolve_alignment_class(alignment.as_deref())
}

/// Current screen size, or 1024×768 outside a browser
#[wasm_bindgen(js_name = getViewportSize)]
pub fn get_viewport_size() -> Result<JsValue, JsValue> {
    let env = BrowserEnvironment::new();
    let viewport = env.viewport_size();
    if !env.has_window() {
        wasm_info!("getViewportSize: no window, using {}x{}", viewport.width, viewport.height);
    }
    serialize(&viewport, "Failed to serialize viewport size")
}
