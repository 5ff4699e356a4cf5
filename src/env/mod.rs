//! Environment accessors
//!
//! The positioner never reads globals. Element geometry, screen size and the
//! active locale are supplied through these traits so the same code runs
//! against the DOM ([`BrowserEnvironment`]) or fixed snapshots
//! ([`StaticEnvironment`]).

pub mod browser;
pub mod fixed;

use std::borrow::Cow;

use crate::models::{Rect, ViewportSize};

pub use browser::BrowserEnvironment;
pub use fixed::StaticEnvironment;

/// Locale reported when the host gives none
pub const DEFAULT_LOCALE: &str = "en-US";

/// Reads the current on-screen rectangle of an element
pub trait GeometryAccessor {
    type Element: ?Sized;

    fn rect(&self, element: &Self::Element) -> Rect;
}

/// Reads the current screen size
///
/// Implementations return [`ViewportSize::FALLBACK`] when no windowing
/// context exists rather than failing.
pub trait ViewportAccessor {
    fn viewport_size(&self) -> ViewportSize;
}

/// Reads the active language tag
pub trait LocaleAccessor {
    fn locale(&self) -> Cow<'_, str>;
}

/// Everything a tip presenter needs from its host
pub trait Environment: GeometryAccessor + ViewportAccessor + LocaleAccessor {}

impl<T> Environment for T where T: GeometryAccessor + ViewportAccessor + LocaleAccessor + ?Sized {}
