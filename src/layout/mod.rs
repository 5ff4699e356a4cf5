//! Tip layout
//!
//! Pure geometry: where a tip goes relative to its target, and the inline
//! style that puts it there.

pub mod constants;
pub mod positioner;
pub mod style;

pub use positioner::{clamp_ranges, compute_position, AnchorTransform, ClampRange, Position};
pub use style::ItemStyle;
