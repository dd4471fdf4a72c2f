//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use veranda::config::Config;
use veranda::data::{FetchError, RowStore, StoreEvent, TreeRowStore};
use veranda::geometry::Rect;
use veranda::manager::DesktopManager;
use veranda::window::Window;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary. `RUST_LOG` selects the
/// level, defaulting to warnings only.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A desktop strategy over a container of the given size.
pub fn desktop(width: f64, height: f64) -> DesktopManager {
    init_logging();
    DesktopManager::new(Config::default(), Rect::new(0.0, 0.0, width, height))
}

/// A plain resizable/movable/decorated window at fixed bounds.
pub fn window(title: &str) -> Window {
    Window::new(title).with_bounds(Rect::new(10.0, 10.0, 300.0, 200.0))
}

/// In-memory row store: rows exist up front, fetching reveals them batch by
/// batch. Fetching past the end fetches what remains and fails.
pub struct MemoryRowStore {
    rows: Vec<String>,
    fetched: usize,
    selected: Option<usize>,
    events: Vec<StoreEvent>,
}

impl MemoryRowStore {
    pub fn new(total: usize) -> Self {
        Self {
            rows: (0..total).map(|i| format!("row-{i}")).collect(),
            fetched: 0,
            selected: None,
            events: Vec::new(),
        }
    }

    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn push_event(&mut self, event: StoreEvent) {
        self.events.push(event);
    }
}

impl RowStore for MemoryRowStore {
    type Row = String;

    fn row_count(&self) -> usize {
        self.fetched
    }

    fn is_all_fetched(&self) -> bool {
        self.fetched == self.rows.len()
    }

    fn fetch_to(&mut self, index: usize) -> Result<(), FetchError> {
        if index < self.rows.len() {
            self.fetched = self.fetched.max(index + 1);
            Ok(())
        } else {
            self.fetched = self.rows.len();
            Err(FetchError::new(index, "past end of data"))
        }
    }

    fn get_row(&self, index: usize) -> Option<&String> {
        if index < self.fetched {
            self.rows.get(index)
        } else {
            None
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

/// In-memory hierarchical store keyed by parent path.
pub struct MemoryTreeStore {
    children: HashMap<Vec<usize>, Vec<String>>,
    fetched: HashMap<Vec<usize>, usize>,
    pub probes: usize,
}

impl MemoryTreeStore {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            fetched: HashMap::new(),
            probes: 0,
        }
    }

    pub fn with_level(mut self, path: &[usize], count: usize) -> Self {
        self.children.insert(
            path.to_vec(),
            (0..count).map(|i| format!("node-{path:?}-{i}")).collect(),
        );
        self
    }
}

impl TreeRowStore for MemoryTreeStore {
    type Row = String;

    fn child_count(&self, path: &[usize]) -> usize {
        *self.fetched.get(path).unwrap_or(&0)
    }

    fn all_children_fetched(&self, path: &[usize]) -> bool {
        self.child_count(path) == self.children.get(path).map_or(0, Vec::len)
    }

    fn fetch_children_to(&mut self, path: &[usize], index: usize) -> Result<(), FetchError> {
        let total = self.children.get(path).map_or(0, Vec::len);
        let fetched = self.fetched.entry(path.to_vec()).or_insert(0);
        if index < total {
            *fetched = (*fetched).max(index + 1);
            Ok(())
        } else {
            *fetched = total;
            Err(FetchError::new(index, "past end of level"))
        }
    }

    fn child_row(&self, path: &[usize], index: usize) -> Option<&String> {
        if index < self.child_count(path) {
            self.children.get(path)?.get(index)
        } else {
            None
        }
    }

    fn has_children(&mut self, path: &[usize]) -> bool {
        self.probes += 1;
        self.children.get(path).is_some_and(|c| !c.is_empty())
    }
}
