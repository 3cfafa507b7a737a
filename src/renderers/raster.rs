//! SVG rasterization backends
//!
//! The browser build draws through an off-screen canvas (see `web::canvas`);
//! native builds render with resvg.

use std::future::Future;

use crate::error::Result;

/// Integer pixel extent of a raster artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Turns serialized SVG markup into a PNG data URI
pub trait Rasterizer {
    /// Rasterize `markup` onto a canvas of exactly `size` pixels and return a
    /// `data:image/png` URI. Decode failures are errors, never blank images.
    fn rasterize(&self, markup: &str, size: PixelSize) -> impl Future<Output = Result<String>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ResvgRasterizer;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::future::{ready, Future};
    use std::path::Path;
    use std::sync::Arc;

    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg::{fontdb, Options, Tree};

    use super::{PixelSize, Rasterizer};
    use crate::error::{ExportError, Result};
    use crate::export_warn;
    use crate::renderers::data_uri::png_data_uri;

    /// Renders with resvg into a tiny-skia pixmap
    #[derive(Clone)]
    pub struct ResvgRasterizer {
        fontdb: Arc<fontdb::Database>,
        default_family: String,
    }

    impl ResvgRasterizer {
        /// Rasterizer with the host's installed fonts, loaded once up front
        pub fn new() -> Self {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            Self::with_database(db)
        }

        /// Installed fonts plus every font file found under `dir`
        pub fn with_font_dir(dir: impl AsRef<Path>) -> Self {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            db.load_fonts_dir(dir);
            Self::with_database(db)
        }

        fn with_database(mut db: fontdb::Database) -> Self {
            let options = Options::default();
            let mut default_family = options.font_family.clone();

            // Generic families default to Arial, Times New Roman, etc. On hosts
            // without them, fall back to any installed face so text is drawn.
            let installed = db
                .faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
            if let Some(installed) = installed {
                if !has_family(&db, fontdb::Family::SansSerif) {
                    db.set_sans_serif_family(installed.clone());
                }
                if !has_family(&db, fontdb::Family::Serif) {
                    db.set_serif_family(installed.clone());
                }
                if !has_family(&db, fontdb::Family::Monospace) {
                    db.set_monospace_family(installed.clone());
                }
                if !has_family(&db, fontdb::Family::Name(&default_family)) {
                    default_family = installed;
                }
            } else {
                export_warn!("No fonts available, text will be missing from PNG exports");
            }

            Self {
                fontdb: Arc::new(db),
                default_family,
            }
        }

        /// Number of font faces available for text
        pub fn font_count(&self) -> usize {
            self.fontdb.len()
        }

        /// Render `markup` to PNG bytes
        pub fn render_png(&self, markup: &str, size: PixelSize) -> Result<Vec<u8>> {
            let mut options = Options::default();
            options.fontdb = Arc::clone(&self.fontdb);
            options.font_family = self.default_family.clone();

            let tree = Tree::from_str(markup, &options)
                .map_err(|e| ExportError::Decode(e.to_string()))?;

            let mut pixmap = Pixmap::new(size.width, size.height).ok_or(ExportError::EmptyChart {
                width: size.width as f32,
                height: size.height as f32,
            })?;

            let tree_size = tree.size();
            let transform = Transform::from_scale(
                size.width as f32 / tree_size.width(),
                size.height as f32 / tree_size.height(),
            );
            resvg::render(&tree, transform, &mut pixmap.as_mut());

            pixmap
                .encode_png()
                .map_err(|e| ExportError::Decode(format!("PNG encoding failed: {}", e)))
        }
    }

    fn has_family(db: &fontdb::Database, family: fontdb::Family<'_>) -> bool {
        db.query(&fontdb::Query {
            families: &[family],
            ..fontdb::Query::default()
        })
        .is_some()
    }

    impl Default for ResvgRasterizer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Rasterizer for ResvgRasterizer {
        fn rasterize(&self, markup: &str, size: PixelSize) -> impl Future<Output = Result<String>> {
            ready(self.render_png(markup, size).map(|png| png_data_uri(&png)))
        }
    }

}
