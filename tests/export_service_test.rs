// End-to-end export scenarios on the native platform pieces

use std::cell::RefCell;
use std::fs;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use fan_chart_export::export::{FileResolver, HeadlessDownload, InlineResolver, NativePlatform, StyleResolver};
use fan_chart_export::renderers::data_uri;
use fan_chart_export::renderers::raster::ResvgRasterizer;
use fan_chart_export::{
    ChartHandle, DownloadTrigger, ExportConfig, ExportError, ExportFactory, ExportService, Platform,
    StyleSheetReference,
};
use futures::executor::block_on;
use tempfile::TempDir;

const FAN_CHART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="240" height="140" viewBox="-120 -120 240 140"><defs><path id="arc-1" d="M -80 0 A 80 80 0 0 1 80 0"/></defs><g class="person"><path d="M -100 0 A 100 100 0 0 1 100 0 L 60 0 A 60 60 0 0 0 -60 0 Z" fill="#ddd"/><text><textPath xlink:href="#arc-1">Müller &amp; Söhne</textPath></text></g></svg>"##;

/// Download trigger that keeps every call for inspection
#[derive(Default)]
struct Downloads {
    calls: RefCell<Vec<(String, String)>>,
}

impl DownloadTrigger for Downloads {
    fn trigger_download(&self, data_uri: &str, filename: &str) {
        self.calls
            .borrow_mut()
            .push((data_uri.to_string(), filename.to_string()));
    }
}

fn svg_markup(data_uri: &str) -> String {
    data_uri::svg_markup(data_uri).expect("SVG data URI")
}

fn style_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.css"), ".webtrees-fan-chart-container svg .person text { font-size: 12px }").unwrap();
    fs::write(dir.path().join("b.css"), "path { stroke: #fff; }").unwrap();
    dir
}

fn service_with(
    dir: &TempDir,
    style_sheets: Vec<StyleSheetReference>,
) -> ExportService<Downloads, FileResolver, ResvgRasterizer> {
    let platform = Platform::new(
        Downloads::default(),
        FileResolver::new(dir.path()),
        ResvgRasterizer::new(),
    );
    ExportService::new(ExportConfig::new(style_sheets), platform).unwrap()
}

#[test]
fn test_svg_export_scenario() {
    let dir = style_dir();
    let service = service_with(&dir, vec![StyleSheetReference::url("a.css")]);
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    block_on(service.export("svg", Some(&chart))).unwrap();

    let calls = service.platform().download.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.starts_with("data:image/svg+xml"));
    assert_eq!(calls[0].1, "fan-chart.svg");

    let markup = svg_markup(&calls[0].0);
    let doc = roxmltree::Document::parse(&markup).expect("exported SVG is well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("class"), Some("webtrees-fan-chart-container"));

    let first = root.first_element_child().unwrap();
    assert_eq!(first.tag_name().name(), "style");
    assert_eq!(first.text(), Some("svg.webtrees-fan-chart-container .person text { font-size: 12px }"));

    let text_path = root
        .descendants()
        .find(|n| n.tag_name().name() == "textPath")
        .unwrap();
    assert_eq!(text_path.text(), Some("Müller & Söhne"));
    assert_eq!(
        text_path.attribute(("http://www.w3.org/1999/xlink", "href")),
        Some("#arc-1")
    );
}

#[test]
fn test_svg_style_entries_follow_input_order() {
    let dir = style_dir();
    let sheets = vec![
        StyleSheetReference::url("b.css"),
        StyleSheetReference::url("missing.css"),
        StyleSheetReference::inline("inline", "text { fill: #111 }"),
        StyleSheetReference::url("a.css"),
    ];
    let service = service_with(&dir, sheets);
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    block_on(service.export("svg", Some(&chart))).unwrap();

    let calls = service.platform().download.calls.borrow();
    let markup = svg_markup(&calls[0].0);
    let doc = roxmltree::Document::parse(&markup).unwrap();
    let names: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "style")
        .map(|n| n.attribute("data-stylesheet").unwrap())
        .collect();
    assert_eq!(names, vec!["b.css", "inline", "a.css"]);
}

#[test]
fn test_svg_without_stylesheets_has_no_style_node() {
    let dir = style_dir();
    let service = service_with(&dir, Vec::new());
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    block_on(service.export("svg", Some(&chart))).unwrap();

    let calls = service.platform().download.calls.borrow();
    let markup = svg_markup(&calls[0].0);
    let doc = roxmltree::Document::parse(&markup).unwrap();
    assert!(!doc.descendants().any(|n| n.tag_name().name() == "style"));
}

#[test]
fn test_png_export_scenario() {
    let dir = style_dir();
    let service = service_with(&dir, vec![StyleSheetReference::url("a.css")]);
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    block_on(service.export("png", Some(&chart))).unwrap();

    let calls = service.platform().download.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "fan-chart.png");

    let encoded = calls[0].0.strip_prefix("data:image/png;base64,").expect("PNG data URI");
    let png = BASE64.decode(encoded).unwrap();
    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    assert_eq!(&png[16..24], &[0, 0, 0, 240, 0, 0, 0, 140]);
}

#[test]
fn test_png_export_honours_scale() {
    let dir = style_dir();
    let platform = Platform::new(
        Downloads::default(),
        FileResolver::new(dir.path()),
        ResvgRasterizer::new(),
    );
    let config = ExportConfig {
        scale: 0.5,
        ..ExportConfig::default()
    };
    let service = ExportService::new(config, platform).unwrap();
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    block_on(service.export("png", Some(&chart))).unwrap();

    let calls = service.platform().download.calls.borrow();
    let png = BASE64
        .decode(calls[0].0.strip_prefix("data:image/png;base64,").unwrap())
        .unwrap();
    assert_eq!(&png[16..24], &[0, 0, 0, 120, 0, 0, 0, 70]);
}

#[test]
fn test_unsupported_format_scenario() {
    let dir = style_dir();
    let service = service_with(&dir, vec![StyleSheetReference::url("a.css")]);
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    for format in ["pdf", "gif", "", "svgz"] {
        assert_eq!(block_on(service.export(format, Some(&chart))), Ok(()));
        assert!(ExportFactory::new().create_export(format).is_none());
    }
    assert!(service.platform().download.calls.borrow().is_empty());
}

#[test]
fn test_missing_chart_scenario() {
    let dir = style_dir();
    let service = service_with(&dir, Vec::new());
    for format in ["png", "svg", "pdf"] {
        assert_eq!(block_on(service.export(format, None)), Ok(()));
    }
    assert!(service.platform().download.calls.borrow().is_empty());
}

#[test]
fn test_zero_dimension_png_is_reported() {
    let dir = style_dir();
    let service = service_with(&dir, Vec::new());
    let chart = ChartHandle::parse(r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"/>"#).unwrap();

    let err = block_on(service.export("png", Some(&chart))).unwrap_err();
    assert!(matches!(err, ExportError::EmptyChart { .. }));
    assert!(service.platform().download.calls.borrow().is_empty());

    // The vector path still works for an empty chart
    block_on(service.export("svg", Some(&chart))).unwrap();
    assert_eq!(service.platform().download.calls.borrow().len(), 1);
}

#[test]
fn test_native_platform_never_downloads() {
    let dir = style_dir();
    let platform = NativePlatform::native(dir.path());
    let css = platform.styles.resolve(&StyleSheetReference::url("b.css")).unwrap();
    assert_eq!(css, "path { stroke: #fff; }");

    let service = ExportService::new(ExportConfig::new(vec![StyleSheetReference::url("a.css")]), platform).unwrap();
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    assert_eq!(block_on(service.export("svg", Some(&chart))), Ok(()));
    assert_eq!(block_on(service.export("png", Some(&chart))), Ok(()));
}

#[test]
fn test_headless_download_with_inline_styles() {
    let platform = Platform::new(HeadlessDownload::default(), InlineResolver, ResvgRasterizer::new());
    let service = ExportService::new(ExportConfig::default(), platform).unwrap();
    let chart = ChartHandle::parse(FAN_CHART).unwrap();

    assert_eq!(block_on(service.export("svg", Some(&chart))), Ok(()));
}

#[test]
fn test_config_from_json() {
    let config = ExportConfig::from_json(
        r#"{"styleSheets":[{"name":"svg.css","url":"css/svg.css"}],"fileStem":"ancestors"}"#,
    )
    .unwrap();
    assert_eq!(config.style_sheets, vec![StyleSheetReference::url("css/svg.css")]);
    assert_eq!(config.file_stem, "ancestors");
}
