//! Onboarding Tip WASM Module
//!
//! Positions onboarding tips next to the element they describe while keeping
//! them on screen, and picks their localized text and alignment class.
//! The layout core is plain Rust; `api` exposes it to JavaScript.

pub mod models;
pub mod layout;
pub mod text;
pub mod style;
pub mod env;
pub mod presenter;
pub mod error;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use layout::{compute_position, AnchorTransform, ItemStyle, Position};
pub use text::{resolve_text, ResolvedText};
pub use style::{resolve_alignment_class, Alignment};
pub use env::{BrowserEnvironment, Environment, StaticEnvironment};
pub use presenter::ItemPresenter;
pub use error::OnboardingError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Onboarding WASM module initialized");
}
