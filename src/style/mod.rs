//! Presentation class names

pub mod alignment;

pub use alignment::{resolve_alignment_class, Alignment};
