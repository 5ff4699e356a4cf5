//! Shared helpers for WASM API operations
//!
//! Console logging, plus serialization with error handling, for the
//! functions exported to JavaScript.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::OnboardingError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        report(OnboardingError::Deserialize {
            context: error_context.to_string(),
            message: e.to_string(),
        })
    })
}

/// Deserialize an optional argument; `undefined` and `null` give `None`
pub fn deserialize_optional<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<Option<T>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    deserialize(value, error_context).map(Some)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        report(OnboardingError::Serialize {
            context: error_context.to_string(),
            message: e.to_string(),
        })
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error to the console and convert it to a JsValue
pub fn report(err: OnboardingError) -> JsValue {
    crate::wasm_error!("{}", err);
    JsValue::from(err)
}
