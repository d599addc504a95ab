//! Document identity, content locators and download requests.

use crate::{select, MediaType, RenderStrategy, Result};

/// MIME type used in data locators when no media type was declared.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// The document handed to the viewer by the host.
///
/// `payload` is the base64-encoded content; `external_locator` is a URI the
/// content can be fetched from. When both are given the locator wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct DocumentSource {
    /// Base64-encoded document content
    pub payload: Option<String>,
    /// URI the document can be loaded from
    pub external_locator: Option<String>,
    /// Declared encoding family
    pub media_type: Option<MediaType>,
}

impl DocumentSource {
    /// An empty source: nothing to display yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A source backed by base64 content.
    pub fn from_payload(payload: impl Into<String>, media_type: Option<MediaType>) -> Self {
        Self {
            payload: Some(payload.into()),
            external_locator: None,
            media_type,
        }
    }

    /// A source backed by an external URI.
    pub fn from_locator(locator: impl Into<String>, media_type: Option<MediaType>) -> Self {
        Self {
            payload: None,
            external_locator: Some(locator.into()),
            media_type,
        }
    }

    /// Whether there is anything to display.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.payload.is_some() || self.external_locator.is_some()
    }

    /// Whether `other` refers to the same document, ignoring media type.
    #[inline]
    pub fn same_identity(&self, other: &DocumentSource) -> bool {
        self.payload == other.payload && self.external_locator == other.external_locator
    }

    /// Render strategy for the declared media type.
    #[inline]
    pub fn strategy(&self) -> RenderStrategy {
        select(self.media_type)
    }

    /// Resolved content locator.
    ///
    /// The external locator if present, otherwise a `data:` URI built from the
    /// payload, otherwise `None`.
    ///
    /// ```rust
    /// use docview_core::{DocumentSource, MediaType};
    ///
    /// let doc = DocumentSource::from_payload("iVBORw0KGgo=", Some(MediaType::Png));
    /// assert_eq!(doc.locator().as_deref(), Some("data:image/png;base64,iVBORw0KGgo="));
    /// ```
    pub fn locator(&self) -> Option<String> {
        if let Some(url) = &self.external_locator {
            return Some(url.clone());
        }
        let payload = self.payload.as_ref()?;
        let mime = self.media_type.map_or(FALLBACK_MIME, MediaType::mime);
        Some(format!("data:{};base64,{}", mime, payload))
    }
}

/// What to save and under which name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_name: String,
    pub locator: String,
}

/// Starts a save of a resolved document locator.
///
/// The mechanics (browser anchor, native save dialog, ...) belong to the host.
pub trait DownloadTrigger {
    fn trigger(&mut self, request: &DownloadRequest) -> Result<()>;
}
