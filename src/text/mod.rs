//! Locale-dependent tip text

pub mod resolver;

pub use resolver::{find_variant, resolve_text, ResolvedText};
