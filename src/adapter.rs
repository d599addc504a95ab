//! Interface to the per-format render adapters.
//!
//! Adapters are external: a paginated document renderer, a multi-frame
//! raster decoder and a plain image element. The viewer hands each one an
//! [`AdapterProps`] snapshot; adapters report page counts and image sizes
//! back through the viewer, stamped with `props.generation`.

use crate::geometry::Extent;
use crate::{DocumentSource, Generation, RenderStrategy, Rotation};

/// Everything an adapter needs to draw the current document.
#[derive(Clone, Debug, PartialEq)]
pub struct AdapterProps<'a> {
    /// Which adapter should draw
    pub strategy: RenderStrategy,
    /// The loaded document
    pub source: &'a DocumentSource,
    /// Resolved content locator (external URI or `data:` URI)
    pub locator: Option<String>,
    /// Uniform scale factor
    pub zoom: f64,
    /// Rigid rotation
    pub rotation: Rotation,
    /// Measured container width in pixels
    pub viewport_width: f64,
    /// Tag to stamp asynchronous reports with
    pub generation: Generation,
}

impl AdapterProps<'_> {
    /// Whether text layers and other fine detail should be rendered.
    ///
    /// Detail layers are laid out in the unrotated frame, so they are only
    /// enabled when no dimension swap occurs.
    #[inline]
    pub fn detail_layers_enabled(&self) -> bool {
        !self.rotation.swaps_dimensions()
    }

    /// Rotation to hand a paginated renderer, combined with the document's
    /// own page rotation.
    ///
    /// Returns `None` at 0° so the renderer keeps its default orientation.
    ///
    /// ## Arguments
    ///
    /// * `intrinsic_degrees` - Rotation stored in the document's first page
    pub fn page_rotation(&self, intrinsic_degrees: u16) -> Option<u16> {
        if self.rotation == Rotation::Deg0 {
            return None;
        }
        Some((self.rotation.degrees() + intrinsic_degrees % 360) % 360)
    }
}

/// A renderer for one document encoding family.
pub trait RenderAdapter {
    /// Draw (or redraw) the document with the given transform.
    fn render(&mut self, props: &AdapterProps<'_>);
}

/// Lookup of the host's adapters by strategy.
pub trait AdapterRegistry {
    /// Adapter for `strategy`, or `None` if the host has none.
    fn adapter_for(&mut self, strategy: RenderStrategy) -> Option<&mut dyn RenderAdapter>;
}

/// Intrinsic pixel size of a single-frame image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_wider(&self) -> bool {
        self.width > self.height
    }
}

/// Layout margins that keep a rotated image centred in its container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationMargins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl RotationMargins {
    /// Compute centring margins for a single-frame image.
    ///
    /// At 90° / 270° the rotated bounding box no longer matches the element's
    /// layout box. The difference between the rendered sides is given back as
    /// margins: above and below (scaled by zoom) for a landscape image, left
    /// and right for a portrait one.
    ///
    /// ## Arguments
    ///
    /// * `intrinsic` - Natural image size, `None` until the image has loaded
    /// * `rendered` - Size of the image element as laid out
    /// * `rotation` - Current rotation
    /// * `zoom` - Current zoom factor
    ///
    /// ## Example
    ///
    /// ```rust
    /// use docview_core::{Extent, ImageDimensions, Rotation, RotationMargins};
    ///
    /// let margins = RotationMargins::compute(
    ///     Some(ImageDimensions::new(1600, 1200)),
    ///     Extent::new(800.0, 600.0),
    ///     Rotation::Deg90,
    ///     2.0,
    /// );
    /// assert_eq!(margins.top, 200.0);
    /// assert_eq!(margins.left, 0.0);
    /// ```
    pub fn compute(
        intrinsic: Option<ImageDimensions>,
        rendered: Extent,
        rotation: Rotation,
        zoom: f64,
    ) -> Self {
        let Some(intrinsic) = intrinsic.filter(|d| d.width > 0) else {
            return Self::default();
        };
        if !rotation.swaps_dimensions() {
            return Self::default();
        }

        let diff = (rendered.width - rendered.height).abs();
        if intrinsic.is_wider() {
            let v = diff * zoom / 2.0;
            Self { top: v, bottom: v, ..Self::default() }
        } else {
            let h = diff / 2.0;
            Self { left: h, right: h, ..Self::default() }
        }
    }

    /// Whether all margins are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
