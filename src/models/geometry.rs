//! Geometry snapshots used by the positioner
//!
//! All values are in CSS pixels, relative to the viewport origin. These are
//! plain snapshots: callers resample them before every positioning pass.

use serde::{Deserialize, Serialize};

/// Screen width assumed when no windowing context is available
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// Screen height assumed when no windowing context is available
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 768.0;

/// Axis-aligned rectangle in viewport coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Size of this rectangle, dropping its origin
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Rendered size of the annotation container
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        rect.size()
    }
}

/// Dimensions of the screen the annotation must stay inside
///
/// `Default` is the headless fallback of 1024×768, not a zero size.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const FALLBACK: ViewportSize =
        ViewportSize::new(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// A point in viewport coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
