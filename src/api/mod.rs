//! Fan chart export WASM API
//!
//! This module provides the JavaScript-facing API and the helpers shared with
//! the rest of the crate (logging macros, error conversion).
//!
//! # Module Structure
//!
//! - `helpers`: logging macros and JsValue conversions
//! - `export`: the `FanChartExport` class (wasm32 only)

pub mod helpers;

#[cfg(target_arch = "wasm32")]
pub mod export;

#[cfg(target_arch = "wasm32")]
pub use export::FanChartExport;
