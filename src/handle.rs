//! Imperative control surface.

use std::fmt;
use std::str::FromStr;

use crate::{DocumentViewer, ViewerError};

/// Direction of a pan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Returns true if the direction is vertical (Up or Down)
    pub fn vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Signed scroll offset for a container of the given size: half a
    /// viewport along the pan axis.
    pub fn offset(self, width: f64, height: f64) -> (f64, f64) {
        match self {
            PanDirection::Up => (0.0, -(height / 2.0)),
            PanDirection::Down => (0.0, height / 2.0),
            PanDirection::Left => (-(width / 2.0), 0.0),
            PanDirection::Right => (width / 2.0, 0.0),
        }
    }
}

/// One of the operations exposed to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    Move(PanDirection),
    RotateCw,
    RotateCcw,
}

impl Command {
    /// All commands, in toolbar order.
    pub const ALL: [Command; 8] = [
        Command::ZoomIn,
        Command::ZoomOut,
        Command::Move(PanDirection::Up),
        Command::Move(PanDirection::Down),
        Command::Move(PanDirection::Left),
        Command::Move(PanDirection::Right),
        Command::RotateCw,
        Command::RotateCcw,
    ];

    /// Kebab-case name, e.g. `"rotate-cw"`.
    pub fn name(self) -> &'static str {
        match self {
            Command::ZoomIn => "zoom-in",
            Command::ZoomOut => "zoom-out",
            Command::Move(PanDirection::Up) => "move-up",
            Command::Move(PanDirection::Down) => "move-down",
            Command::Move(PanDirection::Left) => "move-left",
            Command::Move(PanDirection::Right) => "move-right",
            Command::RotateCw => "rotate-cw",
            Command::RotateCcw => "rotate-ccw",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = ViewerError;

    /// Parse a command name. Dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name() == normalized)
            .ok_or_else(|| ViewerError::UnknownCommand(s.to_string()))
    }
}

/// Façade over a viewer's controllers.
///
/// The handle borrows the viewer, so it always acts on the latest state.
/// Obtain a fresh one with [`DocumentViewer::handle`] whenever needed.
///
/// ```rust
/// use docview_core::{DocumentViewer, ViewerOptions};
///
/// let mut viewer = DocumentViewer::new(ViewerOptions::default());
/// viewer.handle().zoom_in();
/// viewer.handle().move_down(); // nothing mounted: no-op
/// assert_eq!(viewer.zoom_factor(), 1.5);
/// ```
pub struct ControlHandle<'v> {
    viewer: &'v mut DocumentViewer,
}

impl<'v> ControlHandle<'v> {
    pub(crate) fn new(viewer: &'v mut DocumentViewer) -> Self {
        Self { viewer }
    }

    pub fn zoom_in(&mut self) {
        self.viewer.apply(Command::ZoomIn);
    }

    pub fn zoom_out(&mut self) {
        self.viewer.apply(Command::ZoomOut);
    }

    pub fn move_up(&mut self) {
        self.viewer.apply(Command::Move(PanDirection::Up));
    }

    pub fn move_down(&mut self) {
        self.viewer.apply(Command::Move(PanDirection::Down));
    }

    pub fn move_left(&mut self) {
        self.viewer.apply(Command::Move(PanDirection::Left));
    }

    pub fn move_right(&mut self) {
        self.viewer.apply(Command::Move(PanDirection::Right));
    }

    pub fn rotate_cw(&mut self) {
        self.viewer.apply(Command::RotateCw);
    }

    pub fn rotate_ccw(&mut self) {
        self.viewer.apply(Command::RotateCcw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_offsets_are_half_a_viewport() {
        assert_eq!(PanDirection::Up.offset(800.0, 600.0), (0.0, -300.0));
        assert_eq!(PanDirection::Down.offset(800.0, 600.0), (0.0, 300.0));
        assert_eq!(PanDirection::Left.offset(800.0, 600.0), (-400.0, 0.0));
        assert_eq!(PanDirection::Right.offset(800.0, 600.0), (400.0, 0.0));
    }

    #[test]
    fn command_names_parse_back() {
        for cmd in Command::ALL {
            assert_eq!(cmd.name().parse::<Command>().unwrap(), cmd);
        }
        assert_eq!("ROTATE_CCW".parse::<Command>().unwrap(), Command::RotateCcw);
    }

    #[test]
    fn unknown_command() {
        let err = "print".parse::<Command>().unwrap_err();
        assert!(matches!(err, ViewerError::UnknownCommand(ref s) if s == "print"));
    }
}
