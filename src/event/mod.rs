//! Event system for veranda
//!
//! Manager operations record events into an internal queue which the host
//! drains with `take_events()`. This keeps all mutation synchronous on the
//! caller's thread while still letting the host observe lifecycle changes.

use std::time::Instant;

use crate::geometry::{Point, Rect};
use crate::window::{WindowId, WindowState};

/// Window-related events
#[derive(Debug, Clone)]
pub enum WindowEvent {
    /// A window was added to a manager
    Added {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A window was removed from a manager
    Removed {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A window was closed through its close operation
    Closed {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A window was moved
    Moved {
        window_id: WindowId,
        old_position: Point,
        new_position: Point,
        timestamp: Instant,
    },

    /// A window was resized
    Resized {
        window_id: WindowId,
        old_bounds: Rect,
        new_bounds: Rect,
        timestamp: Instant,
    },

    /// A window changed display state
    StateChanged {
        window_id: WindowId,
        old_state: WindowState,
        new_state: WindowState,
        timestamp: Instant,
    },

    /// A window became the active window
    Activated {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A window stopped being the active window
    Deactivated {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A window's modal flag flipped
    ModalChanged {
        window_id: WindowId,
        modal: bool,
        timestamp: Instant,
    },

    /// A window's zoom factor changed
    ZoomChanged {
        window_id: WindowId,
        zoom: f64,
        timestamp: Instant,
    },
}

impl WindowEvent {
    pub fn window_id(&self) -> WindowId {
        match *self {
            WindowEvent::Added { window_id, .. }
            | WindowEvent::Removed { window_id, .. }
            | WindowEvent::Closed { window_id, .. }
            | WindowEvent::Moved { window_id, .. }
            | WindowEvent::Resized { window_id, .. }
            | WindowEvent::StateChanged { window_id, .. }
            | WindowEvent::Activated { window_id, .. }
            | WindowEvent::Deactivated { window_id, .. }
            | WindowEvent::ModalChanged { window_id, .. }
            | WindowEvent::ZoomChanged { window_id, .. } => window_id,
        }
    }
}

/// Tab-strategy events
#[derive(Debug, Clone)]
pub enum TabEvent {
    /// A different tab was selected
    Selected {
        window_id: WindowId,
        index: usize,
        timestamp: Instant,
    },

    /// A tab was closed through its window's close operation
    Closed {
        window_id: WindowId,
        timestamp: Instant,
    },

    /// A tab was dragged to a new position
    Reordered {
        from: usize,
        to: usize,
        timestamp: Instant,
    },
}
