//! The viewer coordinator: one state bundle for every document kind.

use std::fmt;

use tracing::debug;

use crate::adapter::{AdapterProps, AdapterRegistry, ImageDimensions, RotationMargins};
use crate::geometry::{ContentContainer, Extent, ViewportTracker};
use crate::handle::{Command, ControlHandle, PanDirection};
use crate::{
    DocumentSource, DownloadRequest, DownloadTrigger, Generation, PageCountTracker, RenderStrategy,
    Result, Rotation, RotationController, ViewerOptions, ZoomController,
};

/// Advisory shown when no adapter can display the document.
pub const UNSUPPORTED_ADVISORY: &str = "Unsupported document format. Download to view locally.";

/// Message shown while no document has been supplied.
pub const WAITING_MESSAGE: &str = "Waiting for document...";

/// What the content area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayState<'a> {
    /// The host flagged the document as still loading
    Loading { placeholder: &'a str },
    /// No payload and no locator yet
    Waiting,
    /// Content is present but no adapter handles its media type
    Unsupported {
        advisory: &'static str,
        download: Option<DownloadRequest>,
    },
    /// Hand these props to the adapter for `props.strategy`
    Document(AdapterProps<'a>),
}

/// Toolbar readouts and affordances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarState {
    /// Zoom as a whole percentage, rounded down
    pub zoom_percent: u32,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    pub rotation: Rotation,
    /// Page/frame count readout, when enabled and known
    pub page_count: Option<String>,
}

impl ToolbarState {
    /// Zoom readout such as `"150%"`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent)
    }
}

/// Viewer state and coordination for paginated, multi-frame and
/// single-frame documents.
///
/// The viewer owns zoom, rotation, page count and viewport width, and is the
/// only place they change. The host drives it: it loads documents, mounts a
/// [`ContentContainer`], forwards resize events and adapter reports, and reads
/// back [`DisplayState`] / [`ToolbarState`] to draw.
///
/// ## Example
///
/// ```rust
/// use docview_core::{DisplayState, DocumentSource, DocumentViewer, MediaType, ViewerOptions};
///
/// let mut viewer = DocumentViewer::new(ViewerOptions {
///     show_page_count: true,
///     ..Default::default()
/// });
/// viewer.load(DocumentSource::from_payload("JVBERi0xLjQK", Some(MediaType::Pdf)));
///
/// // The adapter resolves the page count later, stamped with its generation
/// let generation = viewer.generation();
/// viewer.report_page_count(generation, 12);
/// assert_eq!(viewer.toolbar().page_count.as_deref(), Some("12 pages"));
///
/// viewer.handle().rotate_cw();
/// match viewer.display() {
///     DisplayState::Document(props) => assert!(!props.detail_layers_enabled()),
///     other => panic!("unexpected display state: {other:?}"),
/// }
/// ```
pub struct DocumentViewer {
    options: ViewerOptions,
    source: DocumentSource,
    strategy: RenderStrategy,
    zoom: ZoomController,
    rotation: RotationController,
    pages: PageCountTracker,
    viewport: ViewportTracker,
    container: Option<Box<dyn ContentContainer>>,
    image: Option<ImageDimensions>,
}

impl fmt::Debug for DocumentViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentViewer")
            .field("options", &self.options)
            .field("source", &self.source)
            .field("strategy", &self.strategy)
            .field("zoom", &self.zoom)
            .field("rotation", &self.rotation)
            .field("pages", &self.pages)
            .field("viewport", &self.viewport)
            .field("mounted", &self.container.is_some())
            .field("image", &self.image)
            .finish()
    }
}

impl DocumentViewer {
    /// Create a viewer with no document loaded.
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            rotation: RotationController::new(options.initial_rotation),
            viewport: ViewportTracker::new(options.resize_debounce_ms),
            options,
            source: DocumentSource::empty(),
            strategy: RenderStrategy::Unsupported,
            zoom: ZoomController::new(),
            pages: PageCountTracker::new(),
            container: None,
            image: None,
        }
    }

    /// Register a rotation observer, notified now with the current rotation
    /// and after every change.
    pub fn observe_rotation(mut self, observer: impl FnMut(Rotation) + 'static) -> Self {
        self.set_rotation_observer(observer);
        self
    }

    /// Replace the rotation observer. See [`DocumentViewer::observe_rotation`].
    pub fn set_rotation_observer(&mut self, observer: impl FnMut(Rotation) + 'static) {
        self.rotation.set_observer(Box::new(observer));
    }

    /// Load a document.
    ///
    /// A new payload or locator resets zoom, rotation, page count and image
    /// size, and starts a new generation. A media type change alone keeps
    /// zoom and rotation but still discards counts from the previous adapter.
    pub fn load(&mut self, source: DocumentSource) {
        if !self.source.same_identity(&source) {
            self.zoom.reset();
            self.rotation.set(self.options.initial_rotation);
            self.reset_reports();
            debug!(
                generation = self.pages.generation().get(),
                media_type = ?source.media_type,
                "document replaced"
            );
        } else if self.source.media_type != source.media_type {
            self.reset_reports();
            debug!(
                generation = self.pages.generation().get(),
                media_type = ?source.media_type,
                "media type changed"
            );
        }
        self.strategy = source.strategy();
        self.source = source;
    }

    fn reset_reports(&mut self) {
        self.pages.reset();
        self.image = None;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
    }

    pub fn set_show_page_count(&mut self, show: bool) {
        self.options.show_page_count = show;
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.options.file_name = file_name.into();
    }

    /// Attach the content container and measure it immediately.
    pub fn mount(&mut self, container: Box<dyn ContentContainer>) {
        self.viewport.mount(&*container);
        self.container = Some(container);
    }

    /// Detach the content container, returning it.
    pub fn unmount(&mut self) -> Option<Box<dyn ContentContainer>> {
        self.viewport.unmount();
        self.container.take()
    }

    /// Forward a window/container resize event.
    pub fn notify_resize(&mut self, now_ms: u64) {
        self.viewport.notify_resize(now_ms);
    }

    /// Drive the resize debouncer. Returns the new width once published.
    pub fn poll_resize(&mut self, now_ms: u64) -> Option<f64> {
        let container = self.container.as_deref()?;
        self.viewport.poll(now_ms, container)
    }

    /// Store a page/frame count from the active adapter.
    ///
    /// Reports for superseded documents, duplicate reports, and reports while
    /// a single-frame or unsupported document is shown are dropped.
    pub fn report_page_count(&mut self, generation: Generation, count: usize) -> bool {
        if !self.strategy.reports_count() {
            debug!(strategy = ?self.strategy, count, "dropping page count for uncounted strategy");
            return false;
        }
        self.pages.report(generation, count)
    }

    /// Store the intrinsic size of a single-frame image once it has loaded.
    pub fn report_image_dimensions(&mut self, generation: Generation, width: u32, height: u32) -> bool {
        if generation != self.pages.generation() || self.strategy != RenderStrategy::SingleFrame {
            debug!(stale = generation.get(), width, height, "dropping image dimensions");
            return false;
        }
        self.image = Some(ImageDimensions::new(width, height));
        true
    }

    /// Run one control operation. Returns true if it had an effect.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ZoomIn => self.zoom.zoom_in(),
            Command::ZoomOut => self.zoom.zoom_out(),
            Command::RotateCw => {
                self.rotation.rotate_cw();
                true
            }
            Command::RotateCcw => {
                self.rotation.rotate_ccw();
                true
            }
            Command::Move(direction) => self.pan(direction),
        }
    }

    fn pan(&mut self, direction: PanDirection) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        let Extent { width, height } = container.extent();
        let (dx, dy) = direction.offset(width, height);
        container.scroll_by(dx, dy);
        true
    }

    /// Control façade over this viewer.
    pub fn handle(&mut self) -> ControlHandle<'_> {
        ControlHandle::new(self)
    }

    /// What the content area should currently show.
    pub fn display(&self) -> DisplayState<'_> {
        if self.options.loading {
            return DisplayState::Loading {
                placeholder: &self.options.loading_placeholder,
            };
        }
        if !self.source.has_content() {
            return DisplayState::Waiting;
        }
        match self.strategy {
            RenderStrategy::Unsupported => DisplayState::Unsupported {
                advisory: UNSUPPORTED_ADVISORY,
                download: self.download_request(),
            },
            strategy => DisplayState::Document(AdapterProps {
                strategy,
                source: &self.source,
                locator: self.source.locator(),
                zoom: self.zoom.factor(),
                rotation: self.rotation.current(),
                viewport_width: self.viewport.width(),
                generation: self.pages.generation(),
            }),
        }
    }

    /// Dispatch the current document to the matching adapter.
    ///
    /// Returns true if an adapter rendered.
    pub fn render_into(&self, registry: &mut dyn AdapterRegistry) -> bool {
        let DisplayState::Document(props) = self.display() else {
            return false;
        };
        match registry.adapter_for(props.strategy) {
            Some(adapter) => {
                adapter.render(&props);
                true
            }
            None => false,
        }
    }

    /// Toolbar readouts for the current state.
    pub fn toolbar(&self) -> ToolbarState {
        let page_count = if self.options.show_page_count && self.strategy.reports_count() {
            self.pages.label()
        } else {
            None
        };
        ToolbarState {
            zoom_percent: self.zoom.percent(),
            can_zoom_in: self.zoom.can_zoom_in(),
            can_zoom_out: self.zoom.can_zoom_out(),
            rotation: self.rotation.current(),
            page_count,
        }
    }

    /// Centring margins for a single-frame image laid out at `rendered`.
    pub fn rotation_margins(&self, rendered: Extent) -> RotationMargins {
        RotationMargins::compute(self.image, rendered, self.rotation.current(), self.zoom.factor())
    }

    /// The save request for the current document, if there is one.
    pub fn download_request(&self) -> Option<DownloadRequest> {
        Some(DownloadRequest {
            file_name: self.options.file_name.clone(),
            locator: self.source.locator()?,
        })
    }

    /// Hand the current document to a download trigger.
    ///
    /// Returns `Ok(false)` when there is nothing to download.
    pub fn download(&self, trigger: &mut dyn DownloadTrigger) -> Result<bool> {
        match self.download_request() {
            Some(request) => {
                trigger.trigger(&request)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom.factor()
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation.current()
    }

    #[inline]
    pub fn page_count(&self) -> Option<usize> {
        self.pages.count()
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport.width()
    }

    #[inline]
    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    /// Generation adapters must stamp their reports with.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.pages.generation()
    }

    #[inline]
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    #[inline]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    #[inline]
    pub fn image_dimensions(&self) -> Option<ImageDimensions> {
        self.image
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }
}
