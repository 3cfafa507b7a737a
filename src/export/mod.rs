//! Chart export pipeline
//!
//! # Module Structure
//!
//! - `download`: download trigger and its short-lived platform handles
//! - `resolver`: stylesheet resolution for vector exports
//! - `vector` / `raster`: the two format exporters
//! - `factory`: format identifier to exporter mapping
//! - `platform`: bundle of environment services passed to exporters
//! - `service`: the façade the application calls
//!
//! Control flow: `ExportService::export` → `ExportFactory::create_export` →
//! `Exporter::export` → `DownloadTrigger::trigger_download`.

pub mod download;
pub mod resolver;
pub mod vector;
pub mod raster;
pub mod factory;
pub mod platform;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use download::{AnchorDownload, DownloadHandle, DownloadSurface, DownloadTrigger, HeadlessDownload, HeadlessSurface};
pub use factory::{ExportFactory, Exporter};
pub use platform::Platform;
pub use raster::RasterExporter;
pub use resolver::{InlineResolver, StyleResolver};
pub use service::ExportService;
pub use vector::VectorExporter;

#[cfg(not(target_arch = "wasm32"))]
pub use platform::NativePlatform;
#[cfg(not(target_arch = "wasm32"))]
pub use resolver::FileResolver;
