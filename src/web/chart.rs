//! Chart handles from live DOM elements

use web_sys::{Element, XmlSerializer};

use crate::api::helpers::describe_js;
use crate::error::{ExportError, Result};
use crate::models::ChartHandle;

impl ChartHandle {
    /// Snapshot a rendered `<svg>` element. The element is serialized, not
    /// modified, and its on-screen bounding box is kept for raster sizing.
    pub fn from_element(element: &Element) -> Result<ChartHandle> {
        let serializer = XmlSerializer::new().map_err(|e| ExportError::Platform(describe_js(&e)))?;
        let markup = serializer
            .serialize_to_string(element)
            .map_err(|e| ExportError::Serialize(describe_js(&e)))?;

        let chart = ChartHandle::parse(&markup)?;
        let rect = element.get_bounding_client_rect();
        if rect.width() > 0.0 && rect.height() > 0.0 {
            Ok(chart.with_rendered_size(rect.width() as f32, rect.height() as f32))
        } else {
            Ok(chart)
        }
    }
}
