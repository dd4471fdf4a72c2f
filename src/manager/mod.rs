//! Window-manager strategies.
//!
//! A strategy owns a container area and an ordered collection of windows
//! (collection order is z-order, last is topmost). Strategies are pluggable:
//! the host registers windows with one of them and can move windows between
//! strategies with [`transfer_windows`] without losing window identity.

mod desktop;
mod modal;
mod single;
mod tabs;

pub use desktop::DesktopManager;
pub use modal::{ModalOverlayManager, OverlaySurface};
pub use single::SingleManager;
pub use tabs::{Tab, TabManager, TabNavigationPolicy};

use serde::{Deserialize, Serialize};

use crate::error::VerandaResult;
use crate::event::WindowEvent;
use crate::geometry::Rect;
use crate::window::{Window, WindowId, WindowState};

/// Snapshot of per-window placement, captured by [`WindowManager::store_state`]
/// and reapplied by [`WindowManager::restore_state`].
///
/// Entries are keyed by window id; entries whose window no longer exists are
/// skipped on restore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub entries: Vec<SessionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    pub window: WindowId,
    pub state: WindowState,
    /// The window's NORMAL geometry: current bounds when captured in NORMAL
    /// state, otherwise the stored restore geometry.
    pub bounds: Rect,
}

/// Common contract of all window-manager strategies.
pub trait WindowManager {
    /// Add a window, taking ownership, and place it per the strategy.
    fn add_window(&mut self, window: Window) -> WindowId;

    /// Remove a window, handing ownership back to the caller.
    fn remove_window(&mut self, id: WindowId) -> Option<Window>;

    /// Close a window through its close operation. Fails when the window is
    /// not closeable; otherwise removes it and returns ownership.
    fn close_window(&mut self, id: WindowId) -> VerandaResult<Window>;

    /// Drop all windows and reset the container.
    fn dispose(&mut self);

    fn container_bounds(&self) -> Rect;

    fn set_container_bounds(&mut self, bounds: Rect);

    fn window(&self, id: WindowId) -> Option<&Window>;

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window>;

    /// Window ids in z-order (or tab order), last = topmost.
    fn z_order(&self) -> Vec<WindowId>;

    fn window_count(&self) -> usize {
        self.z_order().len()
    }

    fn active_window(&self) -> Option<WindowId>;

    /// Recompute which window is active. Idempotent: calling it twice
    /// without intervening mutation yields the same result.
    fn update_active_window(&mut self);

    /// Transition a window's display state and apply the strategy's layout
    /// for the new state.
    fn set_window_state(&mut self, id: WindowId, state: WindowState) -> VerandaResult<()>;

    /// Flip a window's modal flag. Strategies react per their modal policy.
    fn set_window_modal(&mut self, id: WindowId, modal: bool) -> VerandaResult<()>;

    /// Capture per-window placement. Strategies without meaningful session
    /// geometry return an empty snapshot.
    fn store_state(&self) -> SessionState {
        SessionState::default()
    }

    /// Reapply a previously captured snapshot. Unknown window ids are
    /// skipped.
    fn restore_state(&mut self, _state: &SessionState) {}

    /// Drain the queued lifecycle events.
    fn take_events(&mut self) -> Vec<WindowEvent>;
}

/// Move every window of `from` into `to`, bottom-to-top, preserving identity
/// and relative z-order. The destination strategy applies its own
/// decoration/border policy as each window is added.
pub fn transfer_windows<F, T>(from: &mut F, to: &mut T) -> usize
where
    F: WindowManager + ?Sized,
    T: WindowManager + ?Sized,
{
    let ids = from.z_order();
    let mut moved = 0;
    for id in ids {
        if let Some(window) = from.remove_window(id) {
            to.add_window(window);
            moved += 1;
        }
    }
    tracing::info!("Transferred {moved} windows between managers");
    moved
}
