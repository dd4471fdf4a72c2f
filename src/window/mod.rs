//! Window entities for the internal desktop.
//!
//! A [`Window`] is a movable/resizable/closable panel with a title bar,
//! icon, state and modality flag. Windows hold their own per-state previous
//! bounds, so restoring NORMAL geometry after a maximize/minimize round trip
//! never depends on external bookkeeping.

mod consistency;
mod id;
mod registry;

pub use consistency::check_consistency;
pub use id::WindowId;
pub use registry::WindowRegistry;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::geometry::{Point, Rect, Size};
use crate::scene::NodeId;

/// Window display state. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// Opaque reference to an icon image resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef(pub String);

/// One entry of a window's context menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
        }
    }
}

/// An internal window: one movable, resizable, closable, minimizable,
/// maximizable panel managed by a window-manager strategy.
#[derive(Debug, Clone)]
pub struct Window {
    id: WindowId,
    pub title: String,
    pub icon: Option<IconRef>,
    /// Opaque handle to the window's content subtree in the host scene.
    pub content: Option<NodeId>,
    pub context_menu: Vec<MenuItem>,

    state: WindowState,
    previous_state: WindowState,
    /// Last bounds seen while in each state. `Normal` always holds the last
    /// known non-maximized/non-minimized geometry.
    previous_bounds: HashMap<WindowState, Rect>,
    bounds: Rect,

    pub resizable: bool,
    pub movable: bool,
    pub closeable: bool,
    pub maximizable: bool,
    pub minimizable: bool,
    pub modal: bool,
    pub decorated: bool,
    pub borderless: bool,
    pub content_visible: bool,
    /// Set once the window has an explicit position, suppressing the
    /// manager's default placement.
    pub positioned: bool,
    active: bool,

    zoom: f64,
    min_zoom: f64,
    /// Resize hit-test thickness. The effective value is additionally capped
    /// at a third of the smaller window dimension.
    pub edge_size: f64,
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    pub title_bar_height: f64,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: WindowId::next(),
            title: title.into(),
            icon: None,
            content: None,
            context_menu: Vec::new(),
            state: WindowState::Normal,
            previous_state: WindowState::Normal,
            previous_bounds: HashMap::new(),
            bounds: Rect::new(0.0, 0.0, 320.0, 240.0),
            resizable: true,
            movable: true,
            closeable: true,
            maximizable: true,
            minimizable: true,
            modal: false,
            decorated: true,
            borderless: false,
            content_visible: true,
            positioned: false,
            active: false,
            zoom: 1.0,
            min_zoom: 0.25,
            edge_size: 5.0,
            min_size: None,
            max_size: None,
            title_bar_height: 24.0,
        }
    }

    /// A window picking up edge size, minimum zoom and title-bar height
    /// from the library configuration.
    pub fn from_config(title: impl Into<String>, config: &Config) -> Self {
        let mut window = Self::new(title);
        window.edge_size = config.edge_size;
        window.min_zoom = config.min_zoom;
        window.title_bar_height = config.title_bar_height;
        window
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self.positioned = true;
        self
    }

    pub fn with_content(mut self, content: NodeId) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn previous_state(&self) -> WindowState {
        self.previous_state
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.positioned = true;
    }

    pub fn set_location(&mut self, location: Point) {
        self.bounds = self.bounds.with_location(location);
        self.positioned = true;
    }

    /// Bounds last seen in the given state, if that state was ever left.
    pub fn previous_bounds(&self, state: WindowState) -> Option<Rect> {
        self.previous_bounds.get(&state).copied()
    }

    /// Record the current bounds as the restore geometry for `state` without
    /// a state transition. Used by managers before they impose layout.
    pub fn remember_bounds(&mut self, state: WindowState) {
        self.previous_bounds.insert(state, self.bounds);
    }

    /// Transition to a new state.
    ///
    /// The current bounds are persisted for the outgoing state first; a
    /// transition into `Normal` restores the previously captured normal
    /// geometry (no-op when none was captured yet). Returns false when the
    /// window already is in the requested state.
    pub fn set_state(&mut self, state: WindowState) -> bool {
        if state == self.state {
            return false;
        }
        self.previous_bounds.insert(self.state, self.bounds);
        self.previous_state = self.state;
        self.state = state;
        if state == WindowState::Normal {
            if let Some(restored) = self.previous_bounds.get(&WindowState::Normal) {
                self.bounds = *restored;
            }
        }
        debug!(
            "{} state {:?} -> {:?}, bounds {:?}",
            self.id, self.previous_state, self.state, self.bounds
        );
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the window's minimum. Returns whether
    /// the factor actually changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let clamped = if zoom.is_finite() {
            zoom.max(self.min_zoom)
        } else {
            self.min_zoom
        };
        if (clamped - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = clamped;
        true
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// The title-bar strip at the top of the current bounds.
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.w,
            self.title_bar_height.min(self.bounds.h),
        )
    }

    /// Resize border thickness, capped at a third of the smaller dimension
    /// so tiny windows keep a usable interior.
    pub fn effective_edge_size(&self) -> f64 {
        let cap = (self.bounds.w.min(self.bounds.h) / 3.0).max(0.0);
        self.edge_size.min(cap)
    }

    /// Minimum size with the implicit floor at zero.
    pub fn min_size_or_zero(&self) -> Size {
        self.min_size.unwrap_or_default()
    }
}
