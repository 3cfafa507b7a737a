//! Off-screen canvas rasterizer
//!
//! The SVG is loaded into a detached `<img>` as a data URI, decoded, drawn on
//! a detached `<canvas>` and read back as PNG. The decode is raced against a
//! timer so a stuck decode fails instead of hanging the export.

use std::future::Future;

use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Window};

use crate::api::helpers::describe_js;
use crate::error::{ExportError, Result};
use crate::export_warn;
use crate::models::DEFAULT_DECODE_TIMEOUT_MS;
use crate::renderers::data_uri::svg_data_uri;
use crate::renderers::raster::{PixelSize, Rasterizer};

/// Rejection value of the timeout promise
const DECODE_TIMEOUT_MARKER: &str = "fan-chart-export:decode-timeout";

#[derive(Debug, Clone, Copy)]
pub struct CanvasRasterizer {
    decode_timeout_ms: u32,
}

impl Default for CanvasRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_DECODE_TIMEOUT_MS)
    }
}

impl CanvasRasterizer {
    pub fn new(decode_timeout_ms: u32) -> Self {
        Self { decode_timeout_ms }
    }
}

impl Rasterizer for CanvasRasterizer {
    fn rasterize(&self, markup: &str, size: PixelSize) -> impl Future<Output = Result<String>> {
        let source = svg_data_uri(markup);
        let timeout_ms = self.decode_timeout_ms;
        async move { draw_to_png(&source, size, timeout_ms).await }
    }
}

async fn draw_to_png(source: &str, size: PixelSize, timeout_ms: u32) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| ExportError::Platform("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Platform("no document".to_string()))?;

    let image = HtmlImageElement::new().map_err(|e| ExportError::Platform(describe_js(&e)))?;
    image.set_width(size.width);
    image.set_height(size.height);
    image.set_src(source);
    wait_for_decode(&window, &image, timeout_ms).await?;

    let canvas = document
        .create_element("canvas")
        .map_err(|e| ExportError::Platform(describe_js(&e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Platform("canvas element unavailable".to_string()))?;
    canvas.set_width(size.width);
    canvas.set_height(size.height);

    let context = canvas
        .get_context("2d")
        .map_err(|e| ExportError::Platform(describe_js(&e)))?
        .ok_or_else(|| ExportError::Platform("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ExportError::Platform("2d context unavailable".to_string()))?;

    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            0.0,
            0.0,
            f64::from(size.width),
            f64::from(size.height),
        )
        .map_err(|e| ExportError::Decode(describe_js(&e)))?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| ExportError::Tainted(describe_js(&e)))
}

async fn wait_for_decode(window: &Window, image: &HtmlImageElement, timeout_ms: u32) -> Result<()> {
    let decode = image.decode();
    let timer = DecodeTimer::start(window, timeout_ms);

    let outcome = JsFuture::from(Promise::race(&Array::of2(&decode, timer.promise()))).await;
    drop(timer);

    match outcome {
        Ok(_) => Ok(()),
        Err(err) if err.as_string().as_deref() == Some(DECODE_TIMEOUT_MARKER) => {
            Err(ExportError::DecodeTimeout(timeout_ms))
        }
        Err(err) => Err(ExportError::Decode(describe_js(&err))),
    }
}

/// A `setTimeout` whose promise rejects once the delay passes. Dropping the
/// timer clears it, so a decode that wins the race leaves nothing scheduled.
pub struct DecodeTimer {
    window: Window,
    handle: Option<i32>,
    promise: Promise,
}

impl DecodeTimer {
    pub fn start(window: &Window, timeout_ms: u32) -> Self {
        let delay = i32::try_from(timeout_ms).unwrap_or(i32::MAX);
        let mut handle = None;
        let promise = Promise::new(&mut |_resolve, reject| {
            let on_timeout = Closure::once_into_js(move || {
                let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(DECODE_TIMEOUT_MARKER));
            });
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.unchecked_ref(),
                delay,
            ) {
                Ok(id) => handle = Some(id),
                Err(err) => export_warn!("Could not schedule decode timeout: {}", describe_js(&err)),
            }
        });

        Self {
            window: window.clone(),
            handle,
            promise,
        }
    }

    pub fn promise(&self) -> &Promise {
        &self.promise
    }
}

impl Drop for DecodeTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
