//! Anchor-element download surface

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, MouseEvent, MouseEventInit, Window};

use crate::api::helpers::describe_js;
use crate::export::download::{AnchorDownload, DownloadHandle, DownloadSurface};
use crate::export_warn;

/// Hands out detached `<a>` elements from the current document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurface;

/// A detached anchor, removed when dropped
pub struct AnchorHandle {
    anchor: HtmlAnchorElement,
    window: Window,
}

impl DownloadSurface for DocumentSurface {
    type Handle = AnchorHandle;

    fn acquire(&self) -> Option<AnchorHandle> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let anchor = document
            .create_element("a")
            .ok()?
            .dyn_into::<HtmlAnchorElement>()
            .ok()?;
        Some(AnchorHandle { anchor, window })
    }
}

impl DownloadHandle for AnchorHandle {
    fn set_href(&mut self, href: &str) {
        self.anchor.set_href(href);
    }

    fn set_download_name(&mut self, filename: &str) {
        self.anchor.set_download(filename);
    }

    fn set_target(&mut self, target: &str) {
        self.anchor.set_target(target);
    }

    fn activate(&mut self) -> bool {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_view(Some(&self.window));

        match MouseEvent::new_with_mouse_event_init_dict("click", &init) {
            Ok(event) => self.anchor.dispatch_event(&event).is_ok(),
            Err(err) => {
                export_warn!("Could not create click event: {}", describe_js(&err));
                false
            }
        }
    }
}

impl Drop for AnchorHandle {
    fn drop(&mut self) {
        self.anchor.remove();
    }
}

/// Download trigger used in the browser
pub type BrowserDownload = AnchorDownload<DocumentSurface>;
