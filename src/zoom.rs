//! Zoom controller over a fixed ladder of factors.

use tracing::trace;

/// Allowed zoom factors, ordered from smallest to largest.
pub const ZOOM_LADDER: [f64; 6] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0];

/// Ladder index of the 100% factor.
pub const DEFAULT_ZOOM_INDEX: usize = 3;

/// Zoom state, navigated by ladder index rather than by value.
///
/// Stepping past either end of the ladder is a silent no-op.
///
/// ## Example
///
/// ```rust
/// use docview_core::ZoomController;
///
/// let mut zoom = ZoomController::new();
/// assert_eq!(zoom.factor(), 1.0);
///
/// zoom.zoom_in();
/// zoom.zoom_in();
/// assert_eq!(zoom.factor(), 2.0);
///
/// // Already at the top of the ladder
/// assert!(!zoom.zoom_in());
/// assert_eq!(zoom.percent(), 200);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomController {
    /// Current index into `ZOOM_LADDER`
    index: usize,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomController {
    /// Create a controller at 100%.
    pub fn new() -> Self {
        Self {
            index: DEFAULT_ZOOM_INDEX,
        }
    }

    /// Step one factor up. Returns true if the factor changed.
    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.index += 1;
        trace!(factor = self.factor(), "zoom in");
        true
    }

    /// Step one factor down. Returns true if the factor changed.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.index -= 1;
        trace!(factor = self.factor(), "zoom out");
        true
    }

    /// Whether `zoom_in` would change the factor.
    #[inline]
    pub fn can_zoom_in(&self) -> bool {
        self.index + 1 < ZOOM_LADDER.len()
    }

    /// Whether `zoom_out` would change the factor.
    #[inline]
    pub fn can_zoom_out(&self) -> bool {
        self.index > 0
    }

    /// Current factor (1.0 = 100%).
    #[inline]
    pub fn factor(&self) -> f64 {
        ZOOM_LADDER[self.index]
    }

    /// Current factor as a whole percentage, rounded down.
    #[inline]
    pub fn percent(&self) -> u32 {
        (self.factor() * 100.0).floor() as u32
    }

    /// Current ladder index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return to 100%.
    pub fn reset(&mut self) {
        self.index = DEFAULT_ZOOM_INDEX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_full_size() {
        let zoom = ZoomController::new();
        assert_eq!(zoom.factor(), 1.0);
        assert_eq!(zoom.index(), 3);
        assert_eq!(zoom.percent(), 100);
    }

    #[test]
    fn zoom_in_stops_at_top() {
        let mut zoom = ZoomController::new();
        assert!(zoom.zoom_in());
        assert!(zoom.zoom_in());
        assert_eq!(zoom.factor(), 2.0);
        assert!(!zoom.can_zoom_in());

        assert!(!zoom.zoom_in());
        assert_eq!(zoom.factor(), 2.0);
    }

    #[test]
    fn zoom_out_stops_at_bottom() {
        let mut zoom = ZoomController::new();
        for _ in 0..10 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.factor(), 0.25);
        assert_eq!(zoom.percent(), 25);
        assert!(!zoom.can_zoom_out());
        assert!(zoom.can_zoom_in());
    }

    #[test]
    fn percent_rounds_down() {
        let mut zoom = ZoomController::new();
        zoom.zoom_out();
        assert_eq!(zoom.percent(), 75);
        zoom.reset();
        zoom.zoom_in();
        assert_eq!(zoom.percent(), 150);
    }

    proptest! {
        #[test]
        fn factor_always_on_ladder(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut zoom = ZoomController::new();
            for step_in in steps {
                if step_in {
                    zoom.zoom_in();
                } else {
                    zoom.zoom_out();
                }
                prop_assert!(ZOOM_LADDER.contains(&zoom.factor()));
                prop_assert!(zoom.factor() >= ZOOM_LADDER[0]);
                prop_assert!(zoom.factor() <= ZOOM_LADDER[ZOOM_LADDER.len() - 1]);
            }
        }
    }
}
