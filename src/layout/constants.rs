//! Fixed spacing between a tip and its target, in CSS pixels

/// Gap above the target for `top` and `topleft`
pub const TOP_PADDING_PX: f64 = 25.0;

/// Gap to the right of the target for `right`
pub const RIGHT_PADDING_PX: f64 = 25.0;

/// Gap to the left of the target for `left`
pub const LEFT_PADDING_PX: f64 = 25.0;
