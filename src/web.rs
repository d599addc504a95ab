//! Browser bindings for the viewer.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::geometry::{ContentContainer, Extent};
use crate::{DownloadRequest, DownloadTrigger, Result, ViewerError};

impl ContentContainer for HtmlElement {
    fn extent(&self) -> Extent {
        let rect = self.get_bounding_client_rect();
        Extent::new(rect.width(), rect.height())
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        let options = ScrollToOptions::new();
        options.set_left(dx);
        options.set_top(dy);
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_by_with_scroll_to_options(&options);
    }
}

/// Saves documents by clicking a temporary `<a download>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorDownload;

impl DownloadTrigger for AnchorDownload {
    fn trigger(&mut self, request: &DownloadRequest) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| ViewerError::Platform("No window available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ViewerError::Platform("No document available".into()))?;
        let anchor = document
            .create_element("a")
            .map_err(|_| ViewerError::Platform("Failed to create anchor element".into()))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ViewerError::Platform("Failed to cast element to HtmlAnchorElement".into()))?;

        anchor.set_href(&request.locator);
        anchor.set_download(&request.file_name);
        anchor.click();
        Ok(())
    }
}
