//! Pointer input types and the window interaction behavior.

pub mod behavior;
pub mod grabs;

pub use behavior::{BehaviorAction, WindowBehavior};
pub use grabs::{MoveGrab, ResizeGrab, ResizeEdge};

use crate::geometry::Point;

/// Pointer buttons the behavior distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// One pointer event in scene coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Pointer position in scene coordinates (uncorrected for ancestor
    /// scaling; the behavior corrects it).
    pub position: Point,
    pub button: Option<MouseButton>,
    pub click_count: u8,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: None,
            click_count: 0,
        }
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    pub fn with_clicks(mut self, clicks: u8) -> Self {
        self.click_count = clicks;
        self
    }
}

/// Cursor shapes the behavior requests from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    Move,
    NResize,
    SResize,
    EResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
}
