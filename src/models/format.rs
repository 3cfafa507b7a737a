//! Export format identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image formats a chart can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster snapshot (PNG)
    Png,
    /// Vector snapshot (SVG)
    Svg,
}

impl ExportFormat {
    /// Every supported format, in the order the UI offers them
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Png, ExportFormat::Svg];

    /// Parse a format identifier. Matching is case-insensitive and ignores
    /// surrounding whitespace; anything unrecognized yields `None`.
    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "svg" => Some(ExportFormat::Svg),
            _ => None,
        }
    }

    /// The identifier callers use for this format
    pub fn identifier(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    pub fn extension(self) -> &'static str {
        self.identifier()
    }

    /// Suggested download name: `{stem}.{extension}`
    pub fn filename(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
