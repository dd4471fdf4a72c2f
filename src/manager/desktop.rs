//! Desktop strategy: free-form overlap-and-float window placement.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{log_error, OptionExt, VerandaError, VerandaResult};
use crate::event::WindowEvent;
use crate::geometry::{cascade_position, Point, Rect};
use crate::manager::{SessionEntry, SessionState, WindowManager};
use crate::window::{Window, WindowId, WindowRegistry, WindowState};

/// Free-form positioning surface. Windows float, overlap, and keep their
/// z-order in collection order (last = topmost = active).
#[derive(Debug)]
pub struct DesktopManager {
    config: Config,
    container: Rect,
    registry: WindowRegistry,
    z_order: Vec<WindowId>,
    active: Option<WindowId>,
    events: Vec<WindowEvent>,
    /// Running count of default placements, drives the cascade offset.
    placed: usize,
}

impl DesktopManager {
    pub fn new(config: Config, container: Rect) -> Self {
        Self {
            config,
            container,
            registry: WindowRegistry::new(),
            z_order: Vec::new(),
            active: None,
            events: Vec::new(),
            placed: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn push_event(&mut self, event: WindowEvent) {
        self.events.push(event);
    }

    /// Raise a window to the top of the z-order. Mutating the child list
    /// recomputes the active window.
    pub fn to_front(&mut self, id: WindowId) -> VerandaResult<()> {
        let position = self
            .z_order
            .iter()
            .position(|&w| w == id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        self.z_order.remove(position);
        self.z_order.push(id);
        self.update_active_window();
        Ok(())
    }

    /// Move a window to a new position. Emits a Moved event when the
    /// position actually changed.
    pub fn move_window(&mut self, id: WindowId, position: Point) -> VerandaResult<()> {
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        let old_position = window.bounds().location();
        if old_position == position {
            debug!("{} already at {:?}, skipping update", id, position);
            return Ok(());
        }
        window.set_location(position);
        self.push_event(WindowEvent::Moved {
            window_id: id,
            old_position,
            new_position: position,
            timestamp: Instant::now(),
        });
        Ok(())
    }

    /// Resize a window, clamping to its min/max constraints.
    pub fn resize_window(&mut self, id: WindowId, bounds: Rect) -> VerandaResult<()> {
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        let old_bounds = window.bounds();
        let new_bounds =
            bounds.clamp_size(window.min_size_or_zero(), window.max_size.unwrap_or_default());
        if old_bounds == new_bounds {
            return Ok(());
        }
        window.set_bounds(new_bounds);
        self.push_event(WindowEvent::Resized {
            window_id: id,
            old_bounds,
            new_bounds,
            timestamp: Instant::now(),
        });
        Ok(())
    }

    /// Change a window's zoom factor. A grown window is edge-clamped in both
    /// axes so it stays visually reachable within the container.
    pub fn set_window_zoom(&mut self, id: WindowId, zoom: f64) -> VerandaResult<()> {
        let container = self.container;
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        if !window.set_zoom(zoom) {
            return Ok(());
        }
        let zoom = window.zoom();
        let bounds = window.bounds();
        let visual = Rect::new(bounds.x, bounds.y, bounds.w * zoom, bounds.h * zoom)
            .clamp_into(&container);
        window.set_bounds(Rect::new(visual.x, visual.y, bounds.w, bounds.h));
        debug!("{} zoom {} -> repositioned to {:?}", id, zoom, visual.location());
        self.push_event(WindowEvent::ZoomChanged {
            window_id: id,
            zoom,
            timestamp: Instant::now(),
        });
        Ok(())
    }

    /// Apply the desktop layout for a window's current state.
    fn apply_state_layout(&mut self, id: WindowId) {
        let container = self.container;
        let collapsed = self.config.collapsed_size();
        let Some(window) = self.registry.get_mut(id) else {
            return;
        };
        match window.state() {
            WindowState::Maximized => {
                window.borderless = true;
                window.movable = false;
                window.content_visible = true;
                window.set_bounds(container);
            }
            WindowState::Minimized => {
                window.borderless = false;
                window.movable = true;
                window.content_visible = false;
                let bounds = window.bounds();
                window.set_bounds(Rect::new(bounds.x, bounds.y, collapsed.w, collapsed.h));
            }
            WindowState::Normal => {
                window.borderless = false;
                window.movable = true;
                window.content_visible = true;
                // Geometry was already restored by the state transition.
            }
        }
    }
}

impl WindowManager for DesktopManager {
    fn add_window(&mut self, mut window: Window) -> WindowId {
        let id = window.id();

        // Only an already-maximized window arrives borderless.
        window.borderless = window.state() == WindowState::Maximized;

        if !window.positioned {
            let position = cascade_position(
                &self.container,
                window.bounds().size(),
                self.placed,
                self.config.cascade_step,
            );
            window.set_location(position);
            self.placed += 1;
        }

        info!("Adding {} to desktop at {:?}", id, window.bounds().location());
        let state = window.state();
        self.registry.insert(window);
        self.z_order.push(id);
        if state != WindowState::Normal {
            self.apply_state_layout(id);
        }
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
        self.placed = 0;
    }

    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn set_container_bounds(&mut self, bounds: Rect) {
        self.container = bounds;
        // Maximized windows track the container.
        let maximized: Vec<WindowId> = self
            .registry
            .iter()
            .filter(|(_, w)| w.state() == WindowState::Maximized)
            .map(|(id, _)| id)
            .collect();
        for id in maximized {
            self.apply_state_layout(id);
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
        self.apply_state_layout(id);
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

    fn store_state(&self) -> SessionState {
        let entries = self
            .z_order
            .iter()
            .filter_map(|&id| self.registry.get(id))
            .map(|window| SessionEntry {
                window: window.id(),
                state: window.state(),
                bounds: if window.state() == WindowState::Normal {
                    window.bounds()
                } else {
                    window
                        .previous_bounds(WindowState::Normal)
                        .unwrap_or_else(|| window.bounds())
                },
            })
            .collect();
        SessionState { entries }
    }

    fn restore_state(&mut self, state: &SessionState) {
        for entry in &state.entries {
            if !self.registry.contains(entry.window) {
                warn!("Skipping session entry for unknown {}", entry.window);
                continue;
            }
            if let Some(window) = self.registry.get_mut(entry.window) {
                window.set_bounds(entry.bounds);
                window.remember_bounds(WindowState::Normal);
                // set_bounds marks the window as positioned, which keeps the
                // cascade placement from overriding the restored geometry.
            }
            log_error(self.set_window_state(entry.window, entry.state));
        }
    }

    fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }
}
