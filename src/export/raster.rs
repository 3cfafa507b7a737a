//! Raster (PNG) exporter
//!
//! Serializes the chart the same way the vector exporter does, sized to the
//! target canvas, and waits on the rasterizer. That wait is the only
//! suspension point in the export pipeline.

use crate::error::{ExportError, Result};
use crate::export::download::DownloadTrigger;
use crate::export::vector::standalone_markup;
use crate::models::{ChartHandle, ExportArtifact};
use crate::renderers::raster::Rasterizer;
use crate::{export_info, export_warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterExporter {
    scale: f32,
}

impl Default for RasterExporter {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl RasterExporter {
    /// Exporter producing images at the chart's rendered size
    pub fn new() -> Self {
        Self::default()
    }

    /// Exporter producing images scaled by `scale`
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Build the PNG artifact without downloading it.
    ///
    /// A chart with no drawable area is reported as `EmptyChart` rather than
    /// producing a blank or minimum-size image.
    pub async fn render<R: Rasterizer + ?Sized>(
        &self,
        chart: &ChartHandle,
        filename: &str,
        rasterizer: &R,
    ) -> Result<ExportArtifact> {
        let (width, height) = chart.intrinsic_size();
        let size = chart.pixel_size(self.scale);
        if size.is_empty() {
            return Err(ExportError::EmptyChart {
                width: width * self.scale,
                height: height * self.scale,
            });
        }

        let mut document = chart.snapshot();
        if document.attribute("viewBox").is_none() {
            // Keep user units mapped to the unscaled extent when width/height change
            document.set_attribute("viewBox", format!("0 0 {} {}", width, height));
        }
        document.set_attribute("width", size.width.to_string());
        document.set_attribute("height", size.height.to_string());

        let markup = standalone_markup(document)?;
        let data_uri = rasterizer.rasterize(&markup, size).await.map_err(|err| {
            export_warn!("PNG export failed: {}", err);
            err
        })?;

        export_info!("PNG export: {}x{} px", size.width, size.height);
        Ok(ExportArtifact::new(data_uri, filename))
    }

    /// Build the PNG artifact and hand it to the download trigger. Failures
    /// are returned to the caller and nothing is downloaded.
    pub async fn export<R, D>(
        &self,
        chart: &ChartHandle,
        filename: &str,
        rasterizer: &R,
        download: &D,
    ) -> Result<()>
    where
        R: Rasterizer + ?Sized,
        D: DownloadTrigger + ?Sized,
    {
        let artifact = self.render(chart, filename, rasterizer).await?;
        download.trigger_download(&artifact.data_uri, &artifact.filename);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::testing::{FailingRasterizer, RecordingDownload, RecordingRasterizer};
    use crate::renderers::raster::PixelSize;
    use crate::renderers::svg::parse_svg;
    use futures::executor::block_on;

    const CHART: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="150"><circle r="10"/></svg>"#;

    #[test]
    fn test_rasterizes_at_chart_size() {
        let chart = ChartHandle::parse(CHART).unwrap();
        let rasterizer = RecordingRasterizer::default();
        let artifact = block_on(RasterExporter::new().render(&chart, "fan-chart.png", &rasterizer)).unwrap();

        assert_eq!(artifact.mime_type(), Some("image/png"));
        assert_eq!(artifact.filename, "fan-chart.png");

        let (markup, size) = rasterizer.last().unwrap();
        assert_eq!(size, PixelSize::new(300, 150));
        let doc = parse_svg(&markup).unwrap();
        assert_eq!(doc.attribute("width"), Some("300"));
        assert_eq!(doc.attribute("viewBox"), Some("0 0 300 150"));
        assert!(doc.descendants_named("style").is_empty());
    }

    #[test]
    fn test_scale_factor() {
        let chart = ChartHandle::parse(CHART).unwrap();
        let rasterizer = RecordingRasterizer::default();
        block_on(RasterExporter::with_scale(2.0).render(&chart, "x.png", &rasterizer)).unwrap();

        let (markup, size) = rasterizer.last().unwrap();
        assert_eq!(size, PixelSize::new(600, 300));
        let doc = parse_svg(&markup).unwrap();
        assert_eq!(doc.attribute("height"), Some("300"));
        assert_eq!(doc.attribute("viewBox"), Some("0 0 300 150"));
    }

    #[test]
    fn test_existing_view_box_is_kept() {
        let chart = ChartHandle::parse(r#"<svg viewBox="-50 -50 100 80"/>"#).unwrap();
        let rasterizer = RecordingRasterizer::default();
        block_on(RasterExporter::new().render(&chart, "x.png", &rasterizer)).unwrap();
        let (markup, size) = rasterizer.last().unwrap();
        assert_eq!(size, PixelSize::new(100, 80));
        assert_eq!(parse_svg(&markup).unwrap().attribute("viewBox"), Some("-50 -50 100 80"));
    }

    #[test]
    fn test_zero_sized_chart_is_reported() {
        let chart = ChartHandle::parse(r#"<svg width="0" height="0"/>"#).unwrap();
        let rasterizer = RecordingRasterizer::default();
        let download = RecordingDownload::default();
        let err = block_on(RasterExporter::new().export(&chart, "x.png", &rasterizer, &download)).unwrap_err();

        assert!(matches!(err, ExportError::EmptyChart { .. }));
        assert!(rasterizer.last().is_none());
        assert!(download.calls().is_empty());
    }

    #[test]
    fn test_decode_failure_surfaces_without_download() {
        let chart = ChartHandle::parse(CHART).unwrap();
        let download = RecordingDownload::default();
        let err = block_on(RasterExporter::new().export(&chart, "x.png", &FailingRasterizer, &download))
            .unwrap_err();

        assert!(matches!(err, ExportError::Decode(_)));
        assert!(download.calls().is_empty());
    }

    #[test]
    fn test_export_downloads_png() {
        let chart = ChartHandle::parse(CHART).unwrap();
        let download = RecordingDownload::default();
        block_on(RasterExporter::new().export(&chart, "fan-chart.png", &RecordingRasterizer::default(), &download))
            .unwrap();

        let calls = download.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.starts_with("data:image/png;base64,"));
        assert_eq!(calls[0].1, "fan-chart.png");
    }
}
