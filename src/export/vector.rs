//! Vector (SVG) exporter

use crate::error::Result;
use crate::export::download::DownloadTrigger;
use crate::export::resolver::StyleResolver;
use crate::models::{ChartHandle, ExportArtifact, StyleSheetReference};
use crate::renderers::data_uri::svg_data_uri;
use crate::renderers::svg::{ensure_namespaces, inject_styles, serialize_svg, ResolvedStyle, SvgElement};
use crate::{export_info, export_warn};

/// Exports the chart as a self-contained SVG document with its stylesheets
/// inlined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorExporter;

impl VectorExporter {
    pub fn new() -> Self {
        Self
    }

    /// Build the SVG artifact without downloading it
    pub fn render<S: StyleResolver + ?Sized>(
        &self,
        chart: &ChartHandle,
        style_sheets: &[StyleSheetReference],
        container_class: &str,
        filename: &str,
        resolver: &S,
    ) -> Result<ExportArtifact> {
        let mut document = chart.snapshot();
        let styles = resolve_style_sheets(style_sheets, resolver);
        inject_styles(&mut document, &styles, container_class);

        let markup = standalone_markup(document)?;
        export_info!(
            "SVG export: {} stylesheet(s) inlined, {} bytes of markup",
            styles.len(),
            markup.len()
        );
        Ok(ExportArtifact::new(svg_data_uri(&markup), filename))
    }

    /// Build the SVG artifact and hand it to the download trigger
    pub fn export<S, D>(
        &self,
        chart: &ChartHandle,
        style_sheets: &[StyleSheetReference],
        container_class: &str,
        filename: &str,
        resolver: &S,
        download: &D,
    ) -> Result<()>
    where
        S: StyleResolver + ?Sized,
        D: DownloadTrigger + ?Sized,
    {
        let artifact = self.render(chart, style_sheets, container_class, filename, resolver)?;
        download.trigger_download(&artifact.data_uri, &artifact.filename);
        Ok(())
    }
}

/// Resolve stylesheets in order, skipping the ones that fail
pub fn resolve_style_sheets<S: StyleResolver + ?Sized>(
    style_sheets: &[StyleSheetReference],
    resolver: &S,
) -> Vec<ResolvedStyle> {
    style_sheets
        .iter()
        .filter_map(|sheet| match resolver.resolve(sheet) {
            Ok(css) => Some(ResolvedStyle::new(sheet.name.as_str(), css)),
            Err(err) => {
                export_warn!("Skipping stylesheet: {}", err);
                None
            }
        })
        .collect()
}

/// Serialize a detached document so it renders on its own
pub(crate) fn standalone_markup(mut document: SvgElement) -> Result<String> {
    ensure_namespaces(&mut document);
    serialize_svg(&document)
}
