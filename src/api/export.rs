//! Export operations for the WASM API
//!
//! `FanChartExport` is constructed once when the chart page loads and is
//! called from the export buttons:
//!
//! ```js
//! const exporter = new FanChartExport({ styleSheets: [{ name: "svg.css", url: "css/svg.css" }] });
//! await exporter.export("png", document.querySelector(".webtrees-fan-chart-container svg"));
//! ```

use std::rc::Rc;

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Element;

use crate::api::helpers::to_js_error;
use crate::error::ExportError;
use crate::export::ExportService;
use crate::models::{ChartHandle, ExportConfig, ExportFormat};
use crate::web::{BrowserDownload, BrowserPlatform, CanvasRasterizer, DocumentStyleResolver};
use crate::{export_info, export_log};

type BrowserExportService = ExportService<BrowserDownload, DocumentStyleResolver, CanvasRasterizer>;

/// JavaScript-facing export service
#[wasm_bindgen]
pub struct FanChartExport {
    service: Rc<BrowserExportService>,
}

#[wasm_bindgen]
impl FanChartExport {
    /// Create the export service
    ///
    /// # Parameters
    /// - `config`: object with `styleSheets`, `containerClass`, `fileStem`,
    ///   `scale`, `decodeTimeoutMs`; every field is optional and `undefined`
    ///   uses the defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FanChartExport, JsValue> {
        let config: ExportConfig = if config.is_undefined() || config.is_null() {
            ExportConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js_error(&ExportError::Config(e.to_string())))?
        };

        let platform = BrowserPlatform::browser(config.decode_timeout_ms);
        let service = ExportService::new(config, platform).map_err(|e| to_js_error(&e))?;

        export_info!(
            "FanChartExport initialized: {} stylesheet(s), container '{}'",
            service.config().style_sheets.len(),
            service.config().container_class
        );

        Ok(FanChartExport {
            service: Rc::new(service),
        })
    }

    /// Format identifiers this build can export
    #[wasm_bindgen(js_name = supportedFormats)]
    pub fn supported_formats(&self) -> Array {
        self.service
            .supported_formats()
            .iter()
            .map(|format| JsValue::from_str(format.identifier()))
            .collect()
    }

    /// Export the chart and trigger the download
    ///
    /// # Parameters
    /// - `format`: `"png"` or `"svg"`; other values do nothing
    /// - `chart`: the rendered `<svg>` element; `null`/`undefined` does nothing
    ///
    /// # Returns
    /// Promise resolving to `undefined`, or rejecting with an error message
    /// when the export failed (nothing is downloaded in that case)
    pub fn export(&self, format: String, chart: Option<Element>) -> Promise {
        // Skip the DOM snapshot when there is nothing to do
        let chart = match chart {
            Some(chart) if ExportFormat::parse(&format).is_some() => chart,
            _ => {
                export_log!("export('{}') ignored: no chart or unsupported format", format);
                return Promise::resolve(&JsValue::UNDEFINED);
            }
        };

        let service = Rc::clone(&self.service);
        future_to_promise(async move {
            let handle = ChartHandle::from_element(&chart).map_err(|e| to_js_error(&e))?;
            service
                .export(&format, Some(&handle))
                .await
                .map_err(|e| to_js_error(&e))?;
            Ok(JsValue::UNDEFINED)
        })
    }
}
