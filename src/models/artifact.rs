//! Export artifacts

use crate::renderers::data_uri;

/// A finished export: data URI plus suggested filename.
///
/// Short-lived by contract; it is handed to the download trigger and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub data_uri: String,
    pub filename: String,
}

impl ExportArtifact {
    pub fn new(data_uri: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            data_uri: data_uri.into(),
            filename: filename.into(),
        }
    }

    /// MIME type declared by the data URI
    pub fn mime_type(&self) -> Option<&str> {
        data_uri::mime_type(&self.data_uri)
    }
}
