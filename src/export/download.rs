//! Download trigger
//!
//! Hands a data URI to the platform's file-save machinery. A download handle
//! (a detached anchor element in the browser) is acquired for the duration of
//! one call, configured, activated once, and released when it goes out of
//! scope. Nothing outlives the call.

use crate::{export_log, export_warn};

/// Browsing context the download is opened in
pub const NEW_BROWSING_CONTEXT: &str = "_blank";

/// Delivers a finished artifact to the user
pub trait DownloadTrigger {
    /// Offer `data_uri` for download under `filename`. An empty filename lets
    /// the platform choose a name. Never fails; environments that cannot
    /// download make this a no-op.
    fn trigger_download(&self, data_uri: &str, filename: &str);
}

impl<T: DownloadTrigger + ?Sized> DownloadTrigger for &T {
    fn trigger_download(&self, data_uri: &str, filename: &str) {
        (**self).trigger_download(data_uri, filename)
    }
}

/// Short-lived platform object that performs one download.
/// Dropping it releases whatever the platform allocated.
pub trait DownloadHandle {
    fn set_href(&mut self, href: &str);
    fn set_download_name(&mut self, filename: &str);
    fn set_target(&mut self, target: &str);
    /// Fire a single primary activation (click). Returns false if the
    /// platform refused to dispatch it.
    fn activate(&mut self) -> bool;
}

/// Source of download handles
pub trait DownloadSurface {
    type Handle: DownloadHandle;

    /// A fresh handle, or `None` when the environment has no way to download
    fn acquire(&self) -> Option<Self::Handle>;
}

/// Download trigger built on anchor-style handles
#[derive(Debug, Clone, Default)]
pub struct AnchorDownload<S> {
    surface: S,
}

impl<S: DownloadSurface> AnchorDownload<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: DownloadSurface> DownloadTrigger for AnchorDownload<S> {
    fn trigger_download(&self, data_uri: &str, filename: &str) {
        let Some(mut handle) = self.surface.acquire() else {
            export_log!("No download surface available, skipping download of '{}'", filename);
            return;
        };

        handle.set_href(data_uri);
        handle.set_download_name(filename);
        handle.set_target(NEW_BROWSING_CONTEXT);

        if !handle.activate() {
            export_warn!("Download activation for '{}' was not dispatched", filename);
        }
    }
}

/// Surface for environments without a document: never yields a handle
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessSurface;

/// Handle type of `HeadlessSurface`; cannot be constructed
#[derive(Debug)]
pub enum NoHandle {}

impl DownloadHandle for NoHandle {
    fn set_href(&mut self, _href: &str) {
        match *self {}
    }

    fn set_download_name(&mut self, _filename: &str) {
        match *self {}
    }

    fn set_target(&mut self, _target: &str) {
        match *self {}
    }

    fn activate(&mut self) -> bool {
        match *self {}
    }
}

impl DownloadSurface for HeadlessSurface {
    type Handle = NoHandle;

    fn acquire(&self) -> Option<NoHandle> {
        None
    }
}

/// Download trigger for native builds and tests: always a no-op
pub type HeadlessDownload = AnchorDownload<HeadlessSurface>;
