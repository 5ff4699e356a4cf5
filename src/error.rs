//! Error types for the JavaScript boundary
//!
//! The positioning core is total and never fails. Only moving values in and
//! out of JS, or asking for a browser that isn't there, can go wrong.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum OnboardingError {
    /// A JS argument did not have the expected shape
    #[error("{context}: {message}")]
    Deserialize { context: String, message: String },

    /// A result could not be converted to a JS value
    #[error("{context}: {message}")]
    Serialize { context: String, message: String },

    /// An element-based call was made outside a browser window
    #[error("No browser window available")]
    NoWindow,
}

impl From<OnboardingError> for JsValue {
    fn from(err: OnboardingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
