//! Chart handle: the rendered SVG the exporters read from

use crate::error::{ExportError, Result};
use crate::renderers::raster::PixelSize;
use crate::renderers::svg::{parse_svg, SvgElement};

/// Snapshot of a rendered chart's SVG document.
///
/// Created by the rendering side (or from a live element in the browser).
/// Exporters only read it; anything they change is done on a clone.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    root: SvgElement,
    /// On-screen bounding box in CSS pixels, when the host knows it
    rendered_size: Option<(f32, f32)>,
}

impl ChartHandle {
    /// Wrap an element tree whose root must be `svg`
    pub fn new(root: SvgElement) -> Result<Self> {
        if root.local_name() != "svg" {
            return Err(ExportError::NotSvg(root.name));
        }
        Ok(Self {
            root,
            rendered_size: None,
        })
    }

    /// Build a handle from serialized SVG markup
    pub fn parse(markup: &str) -> Result<Self> {
        Self::new(parse_svg(markup)?)
    }

    /// Record the chart's rendered bounding box
    pub fn with_rendered_size(mut self, width: f32, height: f32) -> Self {
        self.rendered_size = Some((width, height));
        self
    }

    pub fn root(&self) -> &SvgElement {
        &self.root
    }

    pub fn rendered_size(&self) -> Option<(f32, f32)> {
        self.rendered_size
    }

    /// Transient copy of the document for exporters to modify
    pub fn snapshot(&self) -> SvgElement {
        self.root.clone()
    }

    /// Chart extent in CSS pixels: the rendered bounding box when known,
    /// otherwise the root `width`/`height`, otherwise the `viewBox` extent.
    /// Unknown dimensions come back as 0.
    pub fn intrinsic_size(&self) -> (f32, f32) {
        if let Some(size) = self.rendered_size {
            return size;
        }

        let view_box = self.root.attribute("viewBox").and_then(parse_view_box);
        let width = self
            .root
            .attribute("width")
            .and_then(parse_length)
            .or(view_box.map(|(w, _)| w))
            .unwrap_or(0.0);
        let height = self
            .root
            .attribute("height")
            .and_then(parse_length)
            .or(view_box.map(|(_, h)| h))
            .unwrap_or(0.0);
        (width, height)
    }

    /// Canvas size for a raster export at the given scale factor
    pub fn pixel_size(&self, scale: f32) -> PixelSize {
        let (width, height) = self.intrinsic_size();
        PixelSize::new(to_pixels(width * scale), to_pixels(height * scale))
    }
}

fn to_pixels(value: f32) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Parse an absolute SVG length (`120`, `120.5px`). Relative units yield None.
fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|n| n.is_finite() && *n >= 0.0)
}

fn parse_view_box(value: &str) -> Option<(f32, f32)> {
    let numbers: Vec<f32> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f32>().ok())
        .collect::<Option<_>>()?;
    match numbers.as_slice() {
        [_, _, w, h] if *w >= 0.0 && *h >= 0.0 => Some((*w, *h)),
        _ => None,
    }
}
