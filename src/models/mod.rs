//! Models module for the onboarding tips
//!
//! Geometry snapshots, placement names and item configuration shared by the
//! layout, text and API layers.

pub mod geometry;
pub mod item;
pub mod placement;

// Re-export commonly used types
pub use geometry::*;
pub use item::*;
pub use placement::Placement;
