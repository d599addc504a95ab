//! Rotation cycle and its controller.

use std::fmt;

use tracing::trace;

use crate::ViewerError;

/// One of the four rigid rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation in degrees.
    #[inline]
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Next rotation clockwise: 0 → 90 → 180 → 270 → 0.
    #[inline]
    pub fn cw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Next rotation counter-clockwise: 0 → 270 → 180 → 90 → 0.
    #[inline]
    pub fn ccw(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// Whether the rotated frame swaps width and height (90° / 270°).
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = ViewerError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(ViewerError::InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Callback invoked with the new rotation whenever it changes.
pub type RotationObserver = Box<dyn FnMut(Rotation)>;

/// Rotation state with an optional change observer.
///
/// The observer is called once when registered, then after every transition
/// that actually changes the value.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use docview_core::{Rotation, RotationController};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut rotation = RotationController::new(Rotation::Deg0);
/// rotation.set_observer(Box::new(move |r: Rotation| sink.borrow_mut().push(r.degrees())));
/// rotation.rotate_ccw();
///
/// assert_eq!(*seen.borrow(), vec![0, 270]);
/// ```
#[derive(Default)]
pub struct RotationController {
    current: Rotation,
    observer: Option<RotationObserver>,
}

impl fmt::Debug for RotationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationController")
            .field("current", &self.current)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl RotationController {
    /// Create a controller at the given rotation, with no observer.
    pub fn new(initial: Rotation) -> Self {
        Self {
            current: initial,
            observer: None,
        }
    }

    /// Register the change observer, replacing any previous one.
    ///
    /// The observer is notified immediately with the current rotation.
    pub fn set_observer(&mut self, mut observer: RotationObserver) {
        observer(self.current);
        self.observer = Some(observer);
    }

    /// Current rotation.
    #[inline]
    pub fn current(&self) -> Rotation {
        self.current
    }

    /// Rotate one step clockwise.
    pub fn rotate_cw(&mut self) {
        self.set(self.current.cw());
    }

    /// Rotate one step counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        self.set(self.current.ccw());
    }

    /// Jump to a rotation. Returns true (and notifies) if the value changed.
    pub fn set(&mut self, rotation: Rotation) -> bool {
        if self.current == rotation {
            return false;
        }
        self.current = rotation;
        trace!(degrees = rotation.degrees(), "rotation changed");
        if let Some(observer) = self.observer.as_mut() {
            observer(rotation);
        }
        true
    }
}
