//! Platform services the exporters depend on

use crate::export::download::{DownloadTrigger, HeadlessDownload};
use crate::export::resolver::StyleResolver;
use crate::renderers::raster::Rasterizer;

/// The three environment-specific pieces of an export: how stylesheets are
/// read, how SVG becomes pixels, and how the result reaches the user
#[derive(Debug, Clone, Default)]
pub struct Platform<D, S, R> {
    pub download: D,
    pub styles: S,
    pub rasterizer: R,
}

impl<D, S, R> Platform<D, S, R>
where
    D: DownloadTrigger,
    S: StyleResolver,
    R: Rasterizer,
{
    pub fn new(download: D, styles: S, rasterizer: R) -> Self {
        Self {
            download,
            styles,
            rasterizer,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type NativePlatform = Platform<
    HeadlessDownload,
    crate::export::resolver::FileResolver,
    crate::renderers::raster::ResvgRasterizer,
>;

#[cfg(not(target_arch = "wasm32"))]
impl NativePlatform {
    /// Native environment: stylesheets read relative to `style_dir`, resvg
    /// rasterization, and no download surface
    pub fn native(style_dir: impl Into<std::path::PathBuf>) -> Self {
        Platform::new(
            HeadlessDownload::default(),
            crate::export::resolver::FileResolver::new(style_dir),
            crate::renderers::raster::ResvgRasterizer::new(),
        )
    }
}
