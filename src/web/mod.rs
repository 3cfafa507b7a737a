//! Browser implementations of the platform services
//!
//! Only compiled for `wasm32`. Native builds use `HeadlessDownload`,
//! `FileResolver` and `ResvgRasterizer` instead.

pub mod canvas;
pub mod chart;
pub mod download;
pub mod stylesheets;

pub use canvas::{CanvasRasterizer, DecodeTimer};
pub use download::{AnchorHandle, BrowserDownload, DocumentSurface};
pub use stylesheets::DocumentStyleResolver;

use crate::export::Platform;

pub type BrowserPlatform = Platform<BrowserDownload, DocumentStyleResolver, CanvasRasterizer>;

impl BrowserPlatform {
    /// Anchor downloads, CSSOM stylesheets and canvas rasterization
    pub fn browser(decode_timeout_ms: u32) -> Self {
        Platform::new(
            BrowserDownload::new(DocumentSurface),
            DocumentStyleResolver,
            CanvasRasterizer::new(decode_timeout_ms),
        )
    }
}
