//! Snapshot environment for headless hosts and tests

use std::borrow::Cow;
use std::collections::HashMap;

use super::{GeometryAccessor, LocaleAccessor, ViewportAccessor, DEFAULT_LOCALE};
use crate::models::{Rect, ViewportSize};

/// Environment backed by fixed values
///
/// Elements are addressed by string id. Without a viewport the headless
/// fallback size is reported.
#[derive(Clone, Debug)]
pub struct StaticEnvironment {
    rects: HashMap<String, Rect>,
    viewport: Option<ViewportSize>,
    locale: String,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self {
            rects: HashMap::new(),
            viewport: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn with_element(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.rects.insert(id.into(), rect);
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportSize) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Replace an element's rect, e.g. after a simulated relayout
    pub fn set_rect(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn set_viewport(&mut self, viewport: Option<ViewportSize>) {
        self.viewport = viewport;
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryAccessor for StaticEnvironment {
    type Element = str;

    /// Unknown ids report an empty rect at the origin
    fn rect(&self, id: &str) -> Rect {
        match self.rects.get(id) {
            Some(rect) => *rect,
            None => {
                log::warn!("No rect registered for element '{}'", id);
                Rect::default()
            }
        }
    }
}

impl ViewportAccessor for StaticEnvironment {
    fn viewport_size(&self) -> ViewportSize {
        self.viewport.unwrap_or_default()
    }
}

impl LocaleAccessor for StaticEnvironment {
    fn locale(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.locale)
    }
}
