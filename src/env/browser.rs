//! DOM-backed environment
//!
//! Geometry comes from `getBoundingClientRect()` for the origin and the
//! element's `offsetWidth`/`offsetHeight` for its size. The viewport is the
//! physical screen (`window.screen`), not the inner window.

use std::borrow::Cow;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use super::{GeometryAccessor, LocaleAccessor, ViewportAccessor, DEFAULT_LOCALE};
use crate::models::{Rect, ViewportSize};

/// Environment reading the live browser window
#[derive(Clone, Debug)]
pub struct BrowserEnvironment {
    window: Option<Window>,
}

impl BrowserEnvironment {
    pub fn new() -> Self {
        Self {
            window: current_window(),
        }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }
}

impl Default for BrowserEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

// JS imports panic when called off wasm, so native hosts are always headless
#[cfg(target_arch = "wasm32")]
fn current_window() -> Option<Window> {
    web_sys::window()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_window() -> Option<Window> {
    None
}

impl GeometryAccessor for BrowserEnvironment {
    type Element = Element;

    fn rect(&self, element: &Element) -> Rect {
        let bounds = element.get_bounding_client_rect();
        // SVG and other non-HTML elements have no offset size
        let (width, height) = match element.dyn_ref::<HtmlElement>() {
            Some(html) => (html.offset_width() as f64, html.offset_height() as f64),
            None => (bounds.width(), bounds.height()),
        };
        Rect::new(bounds.x(), bounds.y(), width, height)
    }
}

impl ViewportAccessor for BrowserEnvironment {
    fn viewport_size(&self) -> ViewportSize {
        let Some(window) = &self.window else {
            return ViewportSize::FALLBACK;
        };

        let screen = match window.screen() {
            Ok(screen) => screen,
            Err(e) => {
                log::warn!("window.screen unavailable, using fallback size: {:?}", e);
                return ViewportSize::FALLBACK;
            }
        };

        match (screen.width(), screen.height()) {
            (Ok(width), Ok(height)) => ViewportSize::new(width as f64, height as f64),
            _ => {
                log::warn!("Could not read screen size, using fallback size");
                ViewportSize::FALLBACK
            }
        }
    }
}

impl LocaleAccessor for BrowserEnvironment {
    fn locale(&self) -> Cow<'_, str> {
        self.window
            .as_ref()
            .and_then(|window| window.navigator().language())
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(DEFAULT_LOCALE))
    }
}
