//! Export service configuration
//!
//! Built once when the service is constructed and never changed afterwards.
//! Every field has a default so hosts only need to pass what they override.

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::models::stylesheet::StyleSheetReference;

/// Class of the element the chart is mounted in on the host page
pub const DEFAULT_CONTAINER_CLASS: &str = "webtrees-fan-chart-container";

/// Stem used for suggested download names
pub const DEFAULT_FILE_STEM: &str = "fan-chart";

/// Upper bound on the browser image decode during PNG export
pub const DEFAULT_DECODE_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Stylesheets inlined into SVG exports, in injection order
    pub style_sheets: Vec<StyleSheetReference>,
    /// Container class the stylesheets are scoped to
    pub container_class: String,
    /// Download name without extension
    pub file_stem: String,
    /// Raster scale factor (1.0 = rendered size)
    pub scale: f32,
    pub decode_timeout_ms: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            style_sheets: Vec::new(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            file_stem: DEFAULT_FILE_STEM.to_string(),
            scale: 1.0,
            decode_timeout_ms: DEFAULT_DECODE_TIMEOUT_MS,
        }
    }
}

impl ExportConfig {
    pub fn new(style_sheets: Vec<StyleSheetReference>) -> Self {
        Self {
            style_sheets,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ExportError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        if self.decode_timeout_ms == 0 {
            return Err(ExportError::Config(
                "decodeTimeoutMs must be greater than zero".to_string(),
            ));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(ExportError::Config(format!(
                "file stem '{}' must not contain path separators",
                self.file_stem
            )));
        }
        Ok(())
    }
}
