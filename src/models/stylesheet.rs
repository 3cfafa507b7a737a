//! Stylesheet references embedded into vector exports

use serde::{Deserialize, Serialize};

/// Where a stylesheet's CSS text comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSource {
    /// Resolvable location (document stylesheet href, file path, `file://` URL)
    Url(String),
    /// CSS text supplied directly
    Inline(String),
}

/// A named stylesheet to inline into exported SVG documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSheetReference {
    /// Logical name, written to the `data-stylesheet` attribute of the injected node
    pub name: String,
    #[serde(flatten)]
    pub source: StyleSource,
}

impl StyleSheetReference {
    /// Reference a stylesheet by URL; the name is the last path segment
    pub fn url(href: impl Into<String>) -> Self {
        let href = href.into();
        let name = href
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&href)
            .to_string();
        Self {
            name,
            source: StyleSource::Url(href),
        }
    }

    /// Reference CSS text that is already in memory
    pub fn inline(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: StyleSource::Inline(css.into()),
        }
    }
}
