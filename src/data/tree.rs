//! Lazily-fetching tree model over a hierarchical row-store.

use tracing::debug;

use crate::data::{FetchError, FetchMode};

/// Hierarchical row lookup keyed by the parent's path (child indices from
/// the root).
pub trait TreeRowStore {
    type Row: Clone;

    /// Children fetched so far under `path`.
    fn child_count(&self, path: &[usize]) -> usize;

    /// Whether all children under `path` are fetched.
    fn all_children_fetched(&self, path: &[usize]) -> bool;

    /// Fetch children under `path` until `index` is available.
    fn fetch_children_to(&mut self, path: &[usize], index: usize) -> Result<(), FetchError>;

    /// An already-fetched child row.
    fn child_row(&self, path: &[usize], index: usize) -> Option<&Self::Row>;

    /// Probe whether the node at `path` has any children. May fetch.
    fn has_children(&mut self, path: &[usize]) -> bool;
}

/// Tree adapter applying the list adapter's batch logic per hierarchy level.
#[derive(Debug)]
pub struct LazyTreeModel<S: TreeRowStore> {
    store: S,
    batch_size: usize,
    mode: FetchMode,
    /// When disabled, every node is reported expandable without probing for
    /// children, avoiding speculative child fetches.
    detect_leaves: bool,
}

impl<S: TreeRowStore> LazyTreeModel<S> {
    pub fn new(store: S, batch_size: usize, mode: FetchMode) -> Self {
        Self {
            store,
            batch_size,
            mode,
            detect_leaves: true,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn set_detect_leaves(&mut self, detect: bool) {
        self.detect_leaves = detect;
    }

    pub fn detect_leaves(&self) -> bool {
        self.detect_leaves
    }

    /// Reported child count under `path`, over-reported by one batch in
    /// automatic mode until the level is fully fetched.
    pub fn child_count(&self, path: &[usize]) -> usize {
        let fetched = self.store.child_count(path);
        match self.mode {
            FetchMode::Manual => fetched,
            FetchMode::Automatic => {
                if self.store.all_children_fetched(path) {
                    fetched
                } else {
                    fetched + self.batch_size
                }
            }
        }
    }

    /// Fetch through the store and return the child at `index` under `path`,
    /// falling back to the last available sibling on a fetch past the end.
    pub fn child(&mut self, path: &[usize], index: usize) -> Option<S::Row> {
        if index >= self.store.child_count(path) && !self.store.all_children_fetched(path) {
            if let Err(err) = self.store.fetch_children_to(path, index) {
                debug!("Treating child fetch failure as end of data: {err}");
            }
        }
        let count = self.store.child_count(path);
        if count == 0 {
            return None;
        }
        self.store.child_row(path, index.min(count - 1)).cloned()
    }

    /// Whether the node at `path` should offer an expansion affordance.
    pub fn is_expandable(&mut self, path: &[usize]) -> bool {
        if !self.detect_leaves {
            return true;
        }
        self.store.has_children(path)
    }
}
