//! Single-window strategy: a plain stack, every window full-bleed.

use std::time::Instant;

use tracing::info;

use crate::error::{OptionExt, VerandaError, VerandaResult};
use crate::event::WindowEvent;
use crate::geometry::Rect;
use crate::manager::WindowManager;
use crate::window::{Window, WindowId, WindowRegistry, WindowState};

/// Stack container: every added window is forced borderless and undecorated
/// and fills the stack. Only the topmost window is active.
#[derive(Debug)]
pub struct SingleManager {
    container: Rect,
    registry: WindowRegistry,
    z_order: Vec<WindowId>,
    active: Option<WindowId>,
    events: Vec<WindowEvent>,
}

impl SingleManager {
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            registry: WindowRegistry::new(),
            z_order: Vec::new(),
            active: None,
            events: Vec::new(),
        }
    }

    fn push_event(&mut self, event: WindowEvent) {
        self.events.push(event);
    }

    fn fill_container(&mut self, id: WindowId) {
        let container = self.container;
        if let Some(window) = self.registry.get_mut(id) {
            window.set_bounds(container);
        }
    }
}

impl WindowManager for SingleManager {
    fn add_window(&mut self, mut window: Window) -> WindowId {
        let id = window.id();
        window.borderless = true;
        window.decorated = false;
        window.set_bounds(self.container);
        info!("Adding {} to single-window stack", id);
        self.registry.insert(window);
        self.z_order.push(id);
        self.push_event(WindowEvent::Added {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.update_active_window();
        id
    }

    fn remove_window(&mut self, id: WindowId) -> Option<Window> {
        let mut window = self.registry.remove(id)?;
        self.z_order.retain(|&w| w != id);
        window.set_active(false);
        if self.active == Some(id) {
            self.active = None;
        }
        self.push_event(WindowEvent::Removed {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.update_active_window();
        Some(window)
    }

    fn close_window(&mut self, id: WindowId) -> VerandaResult<Window> {
        let window = self
            .registry
            .get(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        if !window.closeable {
            return Err(VerandaError::NotCloseable(id));
        }
        self.push_event(WindowEvent::Closed {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.remove_window(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))
    }

    fn dispose(&mut self) {
        self.registry.clear();
        self.z_order.clear();
        self.active = None;
    }

    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn set_container_bounds(&mut self, bounds: Rect) {
        self.container = bounds;
        let ids: Vec<WindowId> = self.z_order.clone();
        for id in ids {
            self.fill_container(id);
        }
    }

    fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.registry.get_mut(id)
    }

    fn z_order(&self) -> Vec<WindowId> {
        self.z_order.clone()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    fn update_active_window(&mut self) {
        let top = self.z_order.last().copied();
        if top == self.active {
            return;
        }
        if let Some(previous) = self.active {
            if let Some(window) = self.registry.get_mut(previous) {
                window.set_active(false);
                self.push_event(WindowEvent::Deactivated {
                    window_id: previous,
                    timestamp: Instant::now(),
                });
            }
        }
        if let Some(id) = top {
            if let Some(window) = self.registry.get_mut(id) {
                window.set_active(true);
                self.push_event(WindowEvent::Activated {
                    window_id: id,
                    timestamp: Instant::now(),
                });
            }
        }
        self.active = top;
    }

    fn set_window_state(&mut self, id: WindowId, state: WindowState) -> VerandaResult<()> {
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        let old_state = window.state();
        if !window.set_state(state) {
            return Ok(());
        }
        // The stack always renders full-bleed; minimizing only hides content.
        window.content_visible = state != WindowState::Minimized;
        self.fill_container(id);
        self.push_event(WindowEvent::StateChanged {
            window_id: id,
            old_state,
            new_state: state,
            timestamp: Instant::now(),
        });
        Ok(())
    }

    fn set_window_modal(&mut self, id: WindowId, modal: bool) -> VerandaResult<()> {
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        if window.modal == modal {
            return Ok(());
        }
        window.modal = modal;
        self.push_event(WindowEvent::ModalChanged {
            window_id: id,
            modal,
            timestamp: Instant::now(),
        });
        Ok(())
    }

    fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }
}
