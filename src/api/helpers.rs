//! Shared helpers for the export API
//!
//! This module contains the crate's logging macros and the conversions used
//! when handing results across the JavaScript boundary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::error::ExportError;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [export] prefix
#[macro_export]
macro_rules! export_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [export] prefix
#[macro_export]
macro_rules! export_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [export] ⚠️ prefix
#[macro_export]
macro_rules! export_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [export] ❌ prefix
#[macro_export]
macro_rules! export_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================
//
// These go through the `log` facade so they work in native builds and tests.
// In the browser `console_log` is installed as the backend at start-up.

pub fn log_debug(msg: &str) {
    log::debug!("[export] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[export] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[export] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[export] ❌ {}", msg);
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert an export error to a JsValue, logging it on the way out
#[cfg(target_arch = "wasm32")]
pub fn to_js_error(err: &ExportError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Describe a JsValue thrown by a browser API
#[cfg(target_arch = "wasm32")]
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
