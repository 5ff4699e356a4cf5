//! Onboarding WASM API
//!
//! This module provides the JavaScript-facing API for onboarding tips.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging and serialization with error handling
//! - `onboarding`: Positioning, text and class resolution exports

pub mod helpers;
pub mod onboarding;

pub use onboarding::{
    compute_item_style, compute_position_js, get_item_style, get_viewport_size,
    resolve_alignment_class_js, resolve_item_text, resolve_text_js,
};
