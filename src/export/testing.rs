//! Test doubles shared by the exporter and service tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{ready, Future};

use crate::error::{ExportError, Result};
use crate::export::download::DownloadTrigger;
use crate::export::resolver::StyleResolver;
use crate::models::{StyleSheetReference, StyleSource};
use crate::renderers::data_uri::png_data_uri;
use crate::renderers::raster::{PixelSize, Rasterizer};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Records every (data URI, filename) pair it is given
#[derive(Debug, Default)]
pub struct RecordingDownload {
    calls: RefCell<Vec<(String, String)>>,
}

impl RecordingDownload {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl DownloadTrigger for RecordingDownload {
    fn trigger_download(&self, data_uri: &str, filename: &str) {
        self.calls
            .borrow_mut()
            .push((data_uri.to_string(), filename.to_string()));
    }
}

/// Resolves URL references from an in-memory table keyed by href
#[derive(Debug, Default, Clone)]
pub struct MapResolver {
    sheets: HashMap<String, String>,
}

impl MapResolver {
    pub fn with(mut self, href: &str, css: &str) -> Self {
        self.sheets.insert(href.to_string(), css.to_string());
        self
    }
}

impl StyleResolver for MapResolver {
    fn resolve(&self, sheet: &StyleSheetReference) -> Result<String> {
        match &sheet.source {
            StyleSource::Inline(css) => Ok(css.clone()),
            StyleSource::Url(href) => self.sheets.get(href).cloned().ok_or_else(|| {
                ExportError::StyleSheet {
                    name: sheet.name.clone(),
                    reason: "not found".to_string(),
                }
            }),
        }
    }
}

/// Remembers the markup it was asked to draw and returns a stub PNG URI
#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    requests: RefCell<Vec<(String, PixelSize)>>,
}

impl RecordingRasterizer {
    pub fn last(&self) -> Option<(String, PixelSize)> {
        self.requests.borrow().last().cloned()
    }
}

impl Rasterizer for RecordingRasterizer {
    fn rasterize(&self, markup: &str, size: PixelSize) -> impl Future<Output = Result<String>> {
        self.requests.borrow_mut().push((markup.to_string(), size));
        ready(Ok(png_data_uri(&PNG_SIGNATURE)))
    }
}

/// Always fails the way a browser does on malformed SVG
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _markup: &str, _size: PixelSize) -> impl Future<Output = Result<String>> {
        ready(Err(ExportError::Decode("image failed to load".to_string())))
    }
}
