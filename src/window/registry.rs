//! Window registry: owning id-keyed storage for the windows of one manager.

use super::{Window, WindowId};
use std::collections::HashMap;

/// Owning map of all windows a manager is responsible for. Z-order is kept
/// separately by the strategies; the registry is only about identity.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: HashMap<WindowId, Window>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window, taking ownership. Returns its id.
    pub fn insert(&mut self, window: Window) -> WindowId {
        let id = window.id();
        self.windows.insert(id, window);
        id
    }

    /// Remove a window, returning ownership to the caller.
    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        self.windows.remove(&id)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn windows_mut(&mut self) -> impl Iterator<Item = &mut Window> {
        self.windows.values_mut()
    }

    pub fn window_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.windows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &Window)> {
        self.windows.iter().map(|(id, window)| (*id, window))
    }

    pub fn clear(&mut self) {
        self.windows.clear();
    }
}
