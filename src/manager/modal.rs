//! Modal-overlay decorator.
//!
//! Wraps any inner strategy. Modal windows are redirected to a separate
//! overlay surface with its own input lock instead of entering the inner
//! strategy's container; flipping a window's modal flag transplants it
//! between the two. The overlay surface is injected at construction — there
//! is no scene-walking discovery, `None` simply means "no overlay here".

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{OptionExt, VerandaError, VerandaResult};
use crate::event::WindowEvent;
use crate::geometry::Rect;
use crate::manager::{SessionState, WindowManager};
use crate::window::{Window, WindowId, WindowRegistry, WindowState};

/// The surface modal windows are placed on, above everything the inner
/// strategy manages.
#[derive(Debug, Clone, Copy)]
pub struct OverlaySurface {
    pub bounds: Rect,
}

impl OverlaySurface {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// Decorator adding modal-overlay handling to an inner strategy.
#[derive(Debug)]
pub struct ModalOverlayManager<M: WindowManager> {
    inner: M,
    overlay: Option<OverlaySurface>,
    overlay_registry: WindowRegistry,
    /// Overlay stacking order; the last window holds the input lock.
    overlay_order: Vec<WindowId>,
    events: Vec<WindowEvent>,
}

impl<M: WindowManager> ModalOverlayManager<M> {
    pub fn new(inner: M, overlay: Option<OverlaySurface>) -> Self {
        Self {
            inner,
            overlay,
            overlay_registry: WindowRegistry::new(),
            overlay_order: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Whether the overlay currently blocks input to everything below it.
    pub fn is_input_locked(&self) -> bool {
        !self.overlay_order.is_empty()
    }

    /// The single window the user may interact with while the lock holds:
    /// the most recently added modal window.
    pub fn interactable_window(&self) -> Option<WindowId> {
        self.overlay_order.last().copied()
    }

    pub fn overlay_windows(&self) -> &[WindowId] {
        &self.overlay_order
    }

    fn in_overlay(&self, id: WindowId) -> bool {
        self.overlay_registry.contains(id)
    }

    fn add_to_overlay(&mut self, mut window: Window, surface: OverlaySurface) -> WindowId {
        let id = window.id();
        window.borderless = false;
        window.decorated = true;
        window.set_bounds(window.bounds().clamp_into(&surface.bounds));
        info!("Adding modal {} to overlay, input locked", id);
        self.overlay_registry.insert(window);
        self.overlay_order.push(id);
        self.events.push(WindowEvent::Added {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.refresh_overlay_active();
        id
    }

    fn remove_from_overlay(&mut self, id: WindowId) -> Option<Window> {
        let mut window = self.overlay_registry.remove(id)?;
        self.overlay_order.retain(|&w| w != id);
        window.set_active(false);
        self.events.push(WindowEvent::Removed {
            window_id: id,
            timestamp: Instant::now(),
        });
        if self.overlay_order.is_empty() {
            debug!("Overlay empty, input lock released");
        }
        self.refresh_overlay_active();
        Some(window)
    }

    /// Exactly the topmost overlay window is active while the lock holds.
    fn refresh_overlay_active(&mut self) {
        let top = self.overlay_order.last().copied();
        let ids: Vec<WindowId> = self.overlay_order.clone();
        for id in ids {
            if let Some(window) = self.overlay_registry.get_mut(id) {
                window.set_active(Some(id) == top);
            }
        }
    }
}

impl<M: WindowManager> WindowManager for ModalOverlayManager<M> {
    fn add_window(&mut self, window: Window) -> WindowId {
        match (window.modal, self.overlay) {
            (true, Some(surface)) => self.add_to_overlay(window, surface),
            _ => self.inner.add_window(window),
        }
    }

    fn remove_window(&mut self, id: WindowId) -> Option<Window> {
        if self.in_overlay(id) {
            self.remove_from_overlay(id)
        } else {
            self.inner.remove_window(id)
        }
    }

    fn close_window(&mut self, id: WindowId) -> VerandaResult<Window> {
        if self.in_overlay(id) {
            let window = self
                .overlay_registry
                .get(id)
                .ok_or_log(|| VerandaError::WindowNotFound(id))?;
            if !window.closeable {
                return Err(VerandaError::NotCloseable(id));
            }
            self.events.push(WindowEvent::Closed {
                window_id: id,
                timestamp: Instant::now(),
            });
            self.remove_from_overlay(id)
                .ok_or_log(|| VerandaError::WindowNotFound(id))
        } else {
            self.inner.close_window(id)
        }
    }

    fn dispose(&mut self) {
        self.overlay_registry.clear();
        self.overlay_order.clear();
        self.inner.dispose();
    }

    fn container_bounds(&self) -> Rect {
        self.inner.container_bounds()
    }

    fn set_container_bounds(&mut self, bounds: Rect) {
        self.inner.set_container_bounds(bounds);
    }

    fn window(&self, id: WindowId) -> Option<&Window> {
        self.overlay_registry.get(id).or_else(|| self.inner.window(id))
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        if self.in_overlay(id) {
            self.overlay_registry.get_mut(id)
        } else {
            self.inner.window_mut(id)
        }
    }

    /// Inner z-order with the overlay stack on top.
    fn z_order(&self) -> Vec<WindowId> {
        let mut order = self.inner.z_order();
        order.extend_from_slice(&self.overlay_order);
        order
    }

    fn active_window(&self) -> Option<WindowId> {
        self.interactable_window().or_else(|| self.inner.active_window())
    }

    fn update_active_window(&mut self) {
        self.refresh_overlay_active();
        self.inner.update_active_window();
    }

    fn set_window_state(&mut self, id: WindowId, state: WindowState) -> VerandaResult<()> {
        if self.in_overlay(id) {
            let window = self
                .overlay_registry
                .get_mut(id)
                .ok_or_log(|| VerandaError::WindowNotFound(id))?;
            let old_state = window.state();
            if window.set_state(state) {
                self.events.push(WindowEvent::StateChanged {
                    window_id: id,
                    old_state,
                    new_state: state,
                    timestamp: Instant::now(),
                });
            }
            Ok(())
        } else {
            self.inner.set_window_state(id, state)
        }
    }

    /// Flipping `modal` transplants the window between the inner strategy
    /// and the overlay (remove from one, add to the other). No stacking
    /// history survives beyond what each side tracks itself.
    fn set_window_modal(&mut self, id: WindowId, modal: bool) -> VerandaResult<()> {
        if self.in_overlay(id) {
            if modal {
                return Ok(());
            }
            let mut window = self
                .remove_from_overlay(id)
                .ok_or_log(|| VerandaError::WindowNotFound(id))?;
            window.modal = false;
            self.events.push(WindowEvent::ModalChanged {
                window_id: id,
                modal: false,
                timestamp: Instant::now(),
            });
            self.inner.add_window(window);
            return Ok(());
        }

        let managed_by_inner = self.inner.window(id).is_some();
        if !managed_by_inner {
            return Err(VerandaError::WindowNotFound(id));
        }

        match (modal, self.overlay) {
            (true, Some(surface)) => {
                let mut window = self
                    .inner
                    .remove_window(id)
                    .ok_or_log(|| VerandaError::WindowNotFound(id))?;
                window.modal = true;
                self.events.push(WindowEvent::ModalChanged {
                    window_id: id,
                    modal: true,
                    timestamp: Instant::now(),
                });
                self.add_to_overlay(window, surface);
                Ok(())
            }
            _ => self.inner.set_window_modal(id, modal),
        }
    }

    fn store_state(&self) -> SessionState {
        self.inner.store_state()
    }

    fn restore_state(&mut self, state: &SessionState) {
        self.inner.restore_state(state);
    }

    fn take_events(&mut self) -> Vec<WindowEvent> {
        let mut events = self.inner.take_events();
        events.append(&mut self.events);
        events
    }
}
