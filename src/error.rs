//! Error types for chart export
//!
//! Only a handful of these ever reach the caller. Stylesheet failures are
//! recovered inside the vector exporter, and unsupported formats or missing
//! charts are not errors at all (see `ExportService::export`).

use thiserror::Error;

/// Top-level export error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// SVG markup could not be parsed into an element tree
    #[error("SVG parsing failed: {0}")]
    Parse(String),

    /// Markup parsed, but the root element is not `<svg>`
    #[error("Chart root is <{0}>, expected <svg>")]
    NotSvg(String),

    /// Writing the element tree back to XML failed
    #[error("SVG serialization failed: {0}")]
    Serialize(String),

    /// A stylesheet could not be resolved to CSS text
    #[error("Stylesheet '{name}' could not be resolved: {reason}")]
    StyleSheet { name: String, reason: String },

    /// The chart has no usable pixel extent
    #[error("Chart has no drawable area ({width}x{height})")]
    EmptyChart { width: f32, height: f32 },

    /// The rasterizer could not decode the serialized SVG
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// Image decode did not settle within the configured bound
    #[error("Image decode timed out after {0} ms")]
    DecodeTimeout(u32),

    /// Canvas read-back was refused (cross-origin content)
    #[error("Canvas is tainted: {0}")]
    Tainted(String),

    /// A required platform primitive (window, document, canvas) is missing
    #[error("Platform unavailable: {0}")]
    Platform(String),

    /// Export configuration is invalid
    #[error("Invalid export configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

impl From<quick_xml::Error> for ExportError {
    fn from(e: quick_xml::Error) -> Self {
        ExportError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Config(e.to_string())
    }
}
