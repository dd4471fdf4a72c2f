//! Library configuration.
//!
//! Plain data, loadable from JSON. Every field has a default so hosts can
//! construct a partial configuration and rely on the rest.

use serde::{Deserialize, Serialize};

use crate::error::VerandaResult;
use crate::geometry::Size;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thickness of the resize hit-test border around a window, in scene
    /// units. Per-window `edge_size` overrides this.
    pub edge_size: f64,
    /// Smallest zoom factor a window accepts.
    pub min_zoom: f64,
    /// Height of a window title bar.
    pub title_bar_height: f64,
    /// Diagonal offset between successive default window placements.
    pub cascade_step: f64,
    /// Width of a minimized (title-bar-only) window.
    pub collapsed_width: f64,
    /// Whether tabs may be closed from their close affordance at all.
    pub tabs_closeable: bool,
    /// Rows fetched per batch by the lazy data adapters.
    pub fetch_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_size: 5.0,
            min_zoom: 0.25,
            title_bar_height: 24.0,
            cascade_step: 24.0,
            collapsed_width: 160.0,
            tabs_closeable: true,
            fetch_batch_size: 500,
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON document. Missing fields fall back
    /// to their defaults.
    pub fn from_json(json: &str) -> VerandaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The collapsed size of a minimized window.
    pub fn collapsed_size(&self) -> Size {
        Size::new(self.collapsed_width, self.title_bar_height)
    }
}
