//! Viewport geometry: container measurement and debounced resize handling.

use tracing::trace;

/// Width used until a container has been measured.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 600.0;

/// Default quiescence window for resize events, in milliseconds.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 30;

/// Measured size of the content container in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The scrollable element that hosts the rendered document.
///
/// Implement this for your platform's element type (a DOM node, a native
/// scroll view, a terminal pane, ...).
pub trait ContentContainer {
    /// Current rendered size of the container.
    fn extent(&self) -> Extent;

    /// Smoothly scroll the content by a signed pixel offset.
    fn scroll_by(&mut self, dx: f64, dy: f64);
}

/// Timer-guarded trigger: only the last trigger in a burst fires.
///
/// The debouncer does not own a timer. The caller passes timestamps from any
/// monotonic millisecond clock and calls `poll()` from its event loop.
///
/// ## Example
///
/// ```rust
/// use docview_core::Debouncer;
///
/// let mut debounce = Debouncer::new(30);
/// debounce.trigger(0);
/// debounce.trigger(20); // restarts the window
///
/// assert!(!debounce.poll(40));
/// assert!(debounce.poll(50));
/// assert!(!debounce.poll(60)); // fires once per burst
/// ```
#[derive(Clone, Debug)]
pub struct Debouncer {
    window_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiescence window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline: None,
        }
    }

    /// Quiescence window in milliseconds.
    #[inline]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Record a trigger, replacing any pending deadline.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.window_ms));
    }

    /// Returns true exactly once when the pending deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a trigger is waiting to fire.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any pending trigger.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

/// Tracks the measured width of the viewer's content container.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    width: f64,
    mounted: bool,
    resize: Debouncer,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

impl ViewportTracker {
    /// Create an unmounted tracker with the given resize window.
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            mounted: false,
            resize: Debouncer::new(debounce_ms),
        }
    }

    /// Seed the width from an immediate measurement and start listening.
    pub fn mount(&mut self, container: &dyn ContentContainer) {
        self.mounted = true;
        self.resize.cancel();
        self.width = container.extent().width;
        trace!(width = self.width, "viewport measured on mount");
    }

    /// Stop listening; a pending resize is discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.resize.cancel();
    }

    /// Record a resize event. Ignored while unmounted.
    pub fn notify_resize(&mut self, now_ms: u64) {
        if self.mounted {
            self.resize.trigger(now_ms);
        }
    }

    /// Re-measure once the resize window has elapsed.
    ///
    /// Returns the new width when it differs from the published one.
    pub fn poll(&mut self, now_ms: u64, container: &dyn ContentContainer) -> Option<f64> {
        if !self.mounted || !self.resize.poll(now_ms) {
            return None;
        }
        let width = container.extent().width;
        if width == self.width {
            return None;
        }
        self.width = width;
        trace!(width, "viewport width published");
        Some(width)
    }

    /// Last published width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a resize is waiting for its quiescence window.
    #[inline]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBox(Extent);

    impl ContentContainer for FixedBox {
        fn extent(&self) -> Extent {
            self.0
        }

        fn scroll_by(&mut self, _dx: f64, _dy: f64) {}
    }

    #[test]
    fn debouncer_fires_after_window() {
        let mut debounce = Debouncer::new(30);
        assert!(!debounce.poll(100));

        debounce.trigger(100);
        assert!(debounce.is_pending());
        assert!(!debounce.poll(129));
        assert!(debounce.poll(130));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn debouncer_burst_fires_once() {
        let mut debounce = Debouncer::new(30);
        for t in (0..100).step_by(10) {
            debounce.trigger(t);
            assert!(!debounce.poll(t));
        }
        // last trigger at 90
        assert!(!debounce.poll(110));
        assert!(debounce.poll(120));
        assert!(!debounce.poll(500));
    }

    #[test]
    fn debouncer_cancel() {
        let mut debounce = Debouncer::default();
        debounce.trigger(0);
        debounce.cancel();
        assert!(!debounce.poll(1_000));
    }

    #[test]
    fn tracker_defaults_before_mount() {
        let tracker = ViewportTracker::default();
        assert_eq!(tracker.width(), DEFAULT_VIEWPORT_WIDTH);
        assert!(!tracker.is_mounted());
    }

    #[test]
    fn mount_measures_immediately() {
        let mut tracker = ViewportTracker::default();
        tracker.mount(&FixedBox(Extent::new(812.0, 400.0)));
        assert_eq!(tracker.width(), 812.0);
    }

    #[test]
    fn resize_publishes_after_quiescence() {
        let mut tracker = ViewportTracker::new(30);
        tracker.mount(&FixedBox(Extent::new(800.0, 400.0)));

        let resized = FixedBox(Extent::new(640.0, 400.0));
        tracker.notify_resize(0);
        tracker.notify_resize(15);
        assert_eq!(tracker.poll(30, &resized), None);
        assert_eq!(tracker.width(), 800.0);

        assert_eq!(tracker.poll(45, &resized), Some(640.0));
        assert_eq!(tracker.width(), 640.0);
    }

    #[test]
    fn unchanged_width_is_not_republished() {
        let mut tracker = ViewportTracker::new(30);
        let container = FixedBox(Extent::new(800.0, 400.0));
        tracker.mount(&container);

        tracker.notify_resize(0);
        assert_eq!(tracker.poll(30, &container), None);
        assert!(!tracker.resize_pending());
    }

    #[test]
    fn unmounted_tracker_ignores_resize() {
        let mut tracker = ViewportTracker::new(30);
        let container = FixedBox(Extent::new(800.0, 400.0));
        tracker.mount(&container);
        tracker.notify_resize(0);
        tracker.unmount();

        assert!(!tracker.resize_pending());
        tracker.notify_resize(10);
        assert_eq!(tracker.poll(100, &FixedBox(Extent::new(300.0, 10.0))), None);
    }
}
