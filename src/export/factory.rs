//! Format-to-exporter mapping

use crate::error::Result;
use crate::export::platform::Platform;
use crate::export::raster::RasterExporter;
use crate::export::vector::VectorExporter;
use crate::export::{DownloadTrigger, StyleResolver};
use crate::models::{ChartHandle, ExportConfig, ExportFormat};
use crate::renderers::raster::Rasterizer;

/// One exporter per supported format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exporter {
    Vector(VectorExporter),
    Raster(RasterExporter),
}

impl Exporter {
    pub fn format(&self) -> ExportFormat {
        match self {
            Exporter::Vector(_) => ExportFormat::Svg,
            Exporter::Raster(_) => ExportFormat::Png,
        }
    }

    /// Run the export and deliver the artifact as `{file_stem}.{extension}`.
    ///
    /// Stylesheets from `config` go to the vector exporter only; raster
    /// output already carries the on-screen styling in its pixels.
    pub async fn export<D, S, R>(
        &self,
        chart: &ChartHandle,
        config: &ExportConfig,
        platform: &Platform<D, S, R>,
    ) -> Result<()>
    where
        D: DownloadTrigger,
        S: StyleResolver,
        R: Rasterizer,
    {
        let filename = self.format().filename(&config.file_stem);
        match self {
            Exporter::Vector(exporter) => exporter.export(
                chart,
                &config.style_sheets,
                &config.container_class,
                &filename,
                &platform.styles,
                &platform.download,
            ),
            Exporter::Raster(exporter) => {
                exporter
                    .export(chart, &filename, &platform.rasterizer, &platform.download)
                    .await
            }
        }
    }
}

/// Creates exporters from format identifiers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportFactory {
    raster_scale: f32,
}

impl Default for ExportFactory {
    fn default() -> Self {
        Self { raster_scale: 1.0 }
    }
}

impl ExportFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose raster exporters scale output by `scale`
    pub fn with_raster_scale(scale: f32) -> Self {
        Self { raster_scale: scale }
    }

    /// Exporter for a format identifier such as `"png"` or `"svg"`.
    /// Unrecognized identifiers return `None`.
    pub fn create_export(&self, format: &str) -> Option<Exporter> {
        ExportFormat::parse(format).map(|format| self.create_for(format))
    }

    /// A fresh exporter for `format`
    pub fn create_for(&self, format: ExportFormat) -> Exporter {
        match format {
            ExportFormat::Png => Exporter::Raster(RasterExporter::with_scale(self.raster_scale)),
            ExportFormat::Svg => Exporter::Vector(VectorExporter::new()),
        }
    }
}
