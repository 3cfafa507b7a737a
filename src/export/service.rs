//! Export service: the entry point the rest of the application calls

use crate::error::Result;
use crate::export::factory::ExportFactory;
use crate::export::platform::Platform;
use crate::export::{DownloadTrigger, StyleResolver};
use crate::models::{ChartHandle, ExportConfig, ExportFormat};
use crate::renderers::raster::Rasterizer;
use crate::{export_info, export_log};

/// Holds the export configuration for the lifetime of the application and
/// routes each request to the right exporter
#[derive(Debug)]
pub struct ExportService<D, S, R> {
    config: ExportConfig,
    factory: ExportFactory,
    platform: Platform<D, S, R>,
}

impl<D, S, R> ExportService<D, S, R>
where
    D: DownloadTrigger,
    S: StyleResolver,
    R: Rasterizer,
{
    /// Validate `config` and build the service around it
    pub fn new(config: ExportConfig, platform: Platform<D, S, R>) -> Result<Self> {
        config.validate()?;
        let factory = ExportFactory::with_raster_scale(config.scale);
        Ok(Self {
            config,
            factory,
            platform,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn platform(&self) -> &Platform<D, S, R> {
        &self.platform
    }

    pub fn supported_formats(&self) -> [ExportFormat; 2] {
        ExportFormat::ALL
    }

    /// Export `chart` in `format` and trigger the download.
    ///
    /// Returns `Ok(())` without doing anything when there is no chart or the
    /// format is not supported; the UI only offers supported formats. Errors
    /// come from the exporter itself (e.g. a failed rasterization) and mean
    /// nothing was downloaded.
    pub async fn export(&self, format: &str, chart: Option<&ChartHandle>) -> Result<()> {
        let Some(chart) = chart else {
            export_log!("No chart to export");
            return Ok(());
        };

        let Some(exporter) = self.factory.create_export(format) else {
            export_log!("Ignoring unsupported export format '{}'", format);
            return Ok(());
        };

        export_info!("Exporting chart as {}", exporter.format());
        exporter.export(chart, &self.config, &self.platform).await
    }
}
