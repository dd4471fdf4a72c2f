//! Tab strategy: one tab per window.
//!
//! Tab label, icon and closable state mirror the window's properties.
//! Closing a tab delegates to the window's own close operation; the tab
//! disappears because the window was closed, never the other way around.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{OptionExt, VerandaError, VerandaResult};
use crate::event::{TabEvent, WindowEvent};
use crate::geometry::Rect;
use crate::manager::WindowManager;
use crate::window::{IconRef, Window, WindowId, WindowRegistry, WindowState};

/// One tab representing a managed window.
#[derive(Debug, Clone)]
pub struct Tab {
    pub window: WindowId,
    pub label: String,
    pub icon: Option<IconRef>,
    pub closable: bool,
    pub disabled: bool,
}

/// Tab-per-window container.
#[derive(Debug)]
pub struct TabManager {
    config: Config,
    container: Rect,
    registry: WindowRegistry,
    tabs: Vec<Tab>,
    selected: Option<usize>,
    active: Option<WindowId>,
    events: Vec<WindowEvent>,
    tab_events: Vec<TabEvent>,
}

impl TabManager {
    pub fn new(config: Config, container: Rect) -> Self {
        Self {
            config,
            container,
            registry: WindowRegistry::new(),
            tabs: Vec::new(),
            selected: None,
            active: None,
            events: Vec::new(),
            tab_events: Vec::new(),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected_tab(&self) -> Option<usize> {
        self.selected
    }

    fn tab_index(&self, id: WindowId) -> Option<usize> {
        self.tabs.iter().position(|t| t.window == id)
    }

    fn set_selected(&mut self, selected: Option<usize>) {
        if selected == self.selected {
            return;
        }
        self.selected = selected;
        if let Some(index) = selected {
            if let Some(tab) = self.tabs.get(index) {
                self.tab_events.push(TabEvent::Selected {
                    window_id: tab.window,
                    index,
                    timestamp: Instant::now(),
                });
            }
        }
    }

    /// Re-mirror label, icon and closable state from the windows.
    pub fn sync_tabs(&mut self) {
        for tab in &mut self.tabs {
            if let Some(window) = self.registry.get(tab.window) {
                tab.label = window.title.clone();
                tab.icon = window.icon.clone();
                tab.closable = window.closeable && self.config.tabs_closeable;
            }
        }
    }

    /// Enforce modal exclusivity over the tab row.
    ///
    /// While any managed window is modal, every other tab is disabled and
    /// the modal tab is force-selected (the most recently added modal wins).
    /// Without a modal window all tabs are enabled, and a dropped selection
    /// falls back to the last tab.
    fn refresh_modal_locks(&mut self) {
        let modal_index = self
            .tabs
            .iter()
            .rposition(|t| self.registry.get(t.window).is_some_and(|w| w.modal));
        match modal_index {
            Some(index) => {
                for (i, tab) in self.tabs.iter_mut().enumerate() {
                    tab.disabled = i != index;
                }
                self.set_selected(Some(index));
            }
            None => {
                for tab in &mut self.tabs {
                    tab.disabled = false;
                }
                let fallback = match self.selected {
                    Some(index) if index < self.tabs.len() => Some(index),
                    _ if self.tabs.is_empty() => None,
                    _ => Some(self.tabs.len() - 1),
                };
                self.set_selected(fallback);
            }
        }
    }

    /// Close the window behind a tab. The tab is removed as a consequence of
    /// the window's close operation.
    pub fn close_tab(&mut self, index: usize) -> VerandaResult<Window> {
        let tab = self.tabs.get(index).ok_or_log(|| {
            VerandaError::InvalidOperation(format!("tab {index} out of range"))
        })?;
        if !tab.closable {
            return Err(VerandaError::NotCloseable(tab.window));
        }
        let id = tab.window;
        self.close_window(id)
    }

    /// Select a tab by position. Disabled tabs cannot be selected.
    pub fn select_tab(&mut self, index: usize) -> VerandaResult<()> {
        let tab = self.tabs.get(index).ok_or_log(|| {
            VerandaError::InvalidOperation(format!("tab {index} out of range"))
        })?;
        if tab.disabled {
            return Err(VerandaError::InvalidOperation(format!(
                "tab {index} is disabled by a modal sibling"
            )));
        }
        self.set_selected(Some(index));
        self.update_active_window();
        Ok(())
    }

    /// Drag-reorder contract: remove the tab at `from`, reinsert at `to`.
    /// Selection follows the moved tab.
    pub fn move_tab(&mut self, from: usize, to: usize) -> VerandaResult<()> {
        if from >= self.tabs.len() || to >= self.tabs.len() {
            return Err(VerandaError::InvalidOperation(format!(
                "tab reorder {from} -> {to} out of range"
            )));
        }
        if from == to {
            return Ok(());
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);

        let selected = self.selected.map(|s| {
            if s == from {
                to
            } else if from < s && to >= s {
                s - 1
            } else if from > s && to <= s {
                s + 1
            } else {
                s
            }
        });
        self.selected = selected;
        self.tab_events.push(TabEvent::Reordered {
            from,
            to,
            timestamp: Instant::now(),
        });
        debug!("Reordered tab {from} -> {to}");
        Ok(())
    }

    /// Drain the queued tab events.
    pub fn take_tab_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.tab_events)
    }
}

impl WindowManager for TabManager {
    fn add_window(&mut self, mut window: Window) -> WindowId {
        let id = window.id();
        // Tab chrome replaces the window decoration.
        window.borderless = true;
        window.decorated = false;
        window.set_bounds(self.container);
        let tab = Tab {
            window: id,
            label: window.title.clone(),
            icon: window.icon.clone(),
            closable: window.closeable && self.config.tabs_closeable,
            disabled: false,
        };
        info!("Adding {} as tab '{}'", id, tab.label);
        self.registry.insert(window);
        self.tabs.push(tab);
        self.events.push(WindowEvent::Added {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.set_selected(Some(self.tabs.len() - 1));
        self.refresh_modal_locks();
        self.update_active_window();
        id
    }

    fn remove_window(&mut self, id: WindowId) -> Option<Window> {
        let index = self.tab_index(id)?;
        let mut window = self.registry.remove(id)?;
        self.tabs.remove(index);
        window.set_active(false);
        if self.active == Some(id) {
            self.active = None;
        }
        // Keep the selection pointing at the same tab where possible; a
        // removed selected tab falls back via the modal-lock refresh.
        self.selected = match self.selected {
            Some(s) if s > index => Some(s - 1),
            Some(s) if s == index => None,
            other => other,
        };
        self.events.push(WindowEvent::Removed {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.refresh_modal_locks();
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
        self.events.push(WindowEvent::Closed {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.tab_events.push(TabEvent::Closed {
            window_id: id,
            timestamp: Instant::now(),
        });
        self.remove_window(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))
    }

    fn dispose(&mut self) {
        self.registry.clear();
        self.tabs.clear();
        self.selected = None;
        self.active = None;
    }

    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn set_container_bounds(&mut self, bounds: Rect) {
        self.container = bounds;
        for window in self.registry.windows_mut() {
            window.set_bounds(bounds);
        }
    }

    fn window(&self, id: WindowId) -> Option<&Window> {
        self.registry.get(id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.registry.get_mut(id)
    }

    fn z_order(&self) -> Vec<WindowId> {
        self.tabs.iter().map(|t| t.window).collect()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.active
    }

    fn update_active_window(&mut self) {
        let selected_window = self
            .selected
            .and_then(|i| self.tabs.get(i))
            .map(|t| t.window);
        if selected_window == self.active {
            return;
        }
        if let Some(previous) = self.active {
            if let Some(window) = self.registry.get_mut(previous) {
                window.set_active(false);
                self.events.push(WindowEvent::Deactivated {
                    window_id: previous,
                    timestamp: Instant::now(),
                });
            }
        }
        if let Some(id) = selected_window {
            if let Some(window) = self.registry.get_mut(id) {
                window.set_active(true);
                self.events.push(WindowEvent::Activated {
                    window_id: id,
                    timestamp: Instant::now(),
                });
            }
        }
        self.active = selected_window;
    }

    fn set_window_state(&mut self, id: WindowId, state: WindowState) -> VerandaResult<()> {
        let container = self.container;
        let window = self
            .registry
            .get_mut(id)
            .ok_or_log(|| VerandaError::WindowNotFound(id))?;
        let old_state = window.state();
        if !window.set_state(state) {
            return Ok(());
        }
        // Tab content always fills the container; minimizing hides content.
        window.content_visible = state != WindowState::Minimized;
        window.set_bounds(container);
        self.events.push(WindowEvent::StateChanged {
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
        self.events.push(WindowEvent::ModalChanged {
            window_id: id,
            modal,
            timestamp: Instant::now(),
        });
        self.refresh_modal_locks();
        self.update_active_window();
        Ok(())
    }

    fn take_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Keyboard navigation over the tab row, independent of any toolkit
/// behavior class: next/previous with wrap-around, skipping disabled tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabNavigationPolicy;

impl TabNavigationPolicy {
    pub fn next(&self, tabs: &[Tab], current: usize) -> Option<usize> {
        self.step(tabs, current, 1)
    }

    pub fn previous(&self, tabs: &[Tab], current: usize) -> Option<usize> {
        self.step(tabs, current, tabs.len().saturating_sub(1))
    }

    fn step(&self, tabs: &[Tab], current: usize, offset: usize) -> Option<usize> {
        if tabs.is_empty() || current >= tabs.len() {
            return None;
        }
        let mut index = current;
        for _ in 0..tabs.len() {
            index = (index + offset) % tabs.len();
            if !tabs[index].disabled {
                return Some(index);
            }
        }
        None
    }
}
