//! # docview-core
//!
//! Headless viewer core for paginated documents, multi-frame raster images
//! and single-frame raster images.
//!
//! This crate provides platform-agnostic state and logic for:
//! - Selecting a render strategy from a declared media type
//! - Zooming along a fixed ladder of factors
//! - Rotating in 90° steps, with change notification
//! - Tracking the container width with debounced resize handling
//! - Tracking page/frame counts, ignoring reports for replaced documents
//! - Panning the content container and building download requests
//!
//! Rendering each format is left to the host's adapters; this crate tells
//! them what to draw.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for options and sources
//! - `toml` - Load [`ViewerOptions`] from TOML
//! - `web` - Enable web/WASM bindings (DOM container, anchor downloads)
//!
//! ## Example
//!
//! ```rust
//! use docview_core::{DisplayState, DocumentSource, DocumentViewer, MediaType, ViewerOptions};
//!
//! let mut viewer = DocumentViewer::new(ViewerOptions::default())
//!     .observe_rotation(|rotation| println!("rotated to {rotation}"));
//!
//! viewer.load(DocumentSource::from_locator(
//!     "https://example.com/scan.tiff",
//!     Some(MediaType::Tiff),
//! ));
//!
//! let mut controls = viewer.handle();
//! controls.zoom_in();
//! controls.rotate_cw();
//!
//! if let DisplayState::Document(props) = viewer.display() {
//!     assert_eq!(props.zoom, 1.5);
//!     assert_eq!(props.rotation.degrees(), 90);
//! }
//! ```

pub mod adapter;
mod error;
mod geometry;
mod handle;
mod media;
mod options;
mod pagination;
mod rotation;
mod source;
mod viewer;
#[cfg(feature = "web")]
pub mod web;
mod zoom;

pub use adapter::{AdapterProps, AdapterRegistry, ImageDimensions, RenderAdapter, RotationMargins};
pub use error::{Result, ViewerError};
pub use geometry::{ContentContainer, Debouncer, Extent, ViewportTracker};
pub use handle::{Command, ControlHandle, PanDirection};
pub use media::{select, select_mime, MediaType, RenderStrategy};
pub use options::ViewerOptions;
pub use pagination::{Generation, PageCountTracker};
pub use rotation::{Rotation, RotationController, RotationObserver};
pub use source::{DocumentSource, DownloadRequest, DownloadTrigger};
pub use viewer::{DisplayState, DocumentViewer, ToolbarState, UNSUPPORTED_ADVISORY, WAITING_MESSAGE};
pub use zoom::{ZoomController, ZOOM_LADDER};

#[cfg(feature = "web")]
pub use web::AnchorDownload;
