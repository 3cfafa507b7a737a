//! Fan Chart Export WASM Module
//!
//! Turns a rendered fan chart SVG into a downloadable SVG or PNG file.
//! The export pipeline is platform-independent; the browser build plugs in
//! anchor downloads, CSSOM stylesheet lookup and canvas rasterization.

pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod renderers;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used types
pub use error::{ExportError, Result};
pub use export::{DownloadTrigger, ExportFactory, ExportService, Exporter, Platform, RasterExporter, VectorExporter};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[export] logger already initialized: {}", e).into());
    }

    log::info!("Fan chart export WASM module initialized");
}
