//! Media types and render strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::ViewerError;

/// Encoding family of a loaded document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum MediaType {
    /// `application/pdf`
    Pdf,
    /// `image/tiff`
    Tiff,
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
}

impl MediaType {
    /// Canonical MIME string.
    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Tiff => "image/tiff",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }

    /// Look up a MIME string, returning `None` for anything unrecognised.
    ///
    /// Matching is case-insensitive and ignores parameters after `;`.
    ///
    /// ```rust
    /// use docview_core::MediaType;
    ///
    /// assert_eq!(MediaType::from_mime("image/JPEG"), Some(MediaType::Jpeg));
    /// assert_eq!(MediaType::from_mime("application/pdf; version=1.7"), Some(MediaType::Pdf));
    /// assert_eq!(MediaType::from_mime("text/plain"), None);
    /// ```
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" | "application/x-pdf" => Some(MediaType::Pdf),
            "image/tiff" | "image/tif"              => Some(MediaType::Tiff),
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(MediaType::Jpeg),
            "image/png"                             => Some(MediaType::Png),
            _                                       => None,
        }
    }

    /// Render strategy for this media type.
    #[inline]
    pub fn strategy(self) -> RenderStrategy {
        match self {
            MediaType::Pdf => RenderStrategy::Paginated,
            MediaType::Tiff => RenderStrategy::MultiFrame,
            MediaType::Jpeg | MediaType::Png => RenderStrategy::SingleFrame,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

impl FromStr for MediaType {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::from_mime(s).ok_or_else(|| ViewerError::UnknownMediaType(s.to_string()))
    }
}

impl TryFrom<String> for MediaType {
    type Error = ViewerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.mime().to_string()
    }
}

/// How a document is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// Multi-page document renderer (PDF-like)
    Paginated,
    /// Multi-frame raster decoder (TIFF-like)
    MultiFrame,
    /// Plain raster image element (JPEG/PNG-like)
    SingleFrame,
    /// No adapter can display the document
    Unsupported,
}

impl RenderStrategy {
    /// Whether adapters of this strategy report a page/frame count.
    #[inline]
    pub fn reports_count(self) -> bool {
        matches!(self, RenderStrategy::Paginated | RenderStrategy::MultiFrame)
    }
}

/// Pick the render strategy for a declared media type.
///
/// Total: an absent type selects [`RenderStrategy::Unsupported`].
#[inline]
pub fn select(media_type: Option<MediaType>) -> RenderStrategy {
    media_type.map_or(RenderStrategy::Unsupported, MediaType::strategy)
}

/// Pick the render strategy for a raw MIME string.
///
/// ```rust
/// use docview_core::{select_mime, RenderStrategy};
///
/// assert_eq!(select_mime(Some("image/tiff")), RenderStrategy::MultiFrame);
/// assert_eq!(select_mime(Some("video/mp4")), RenderStrategy::Unsupported);
/// assert_eq!(select_mime(None), RenderStrategy::Unsupported);
/// ```
pub fn select_mime(mime: Option<&str>) -> RenderStrategy {
    select(mime.and_then(MediaType::from_mime))
}
