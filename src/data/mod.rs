//! Adapter layer over an abstract paged row-store.
//!
//! The store itself (fetching, caching, selection) is an external
//! collaborator; these adapters only add lazy-batch sizing, fetch-failure
//! boundary handling, and change-event translation for view binding.

pub mod list;
pub mod observable;
pub mod tree;

pub use list::LazyRowList;
pub use observable::{ListChange, ObservableRowList};
pub use tree::{LazyTreeModel, TreeRowStore};

/// How the adapters grow the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Over-report the size by one batch until the store is fully fetched,
    /// inducing the host's virtualization to keep requesting rows.
    #[default]
    Automatic,
    /// Report only what is actually fetched.
    Manual,
}

/// A fetch reached past what the store can provide.
#[derive(Debug, thiserror::Error)]
#[error("fetch failed at row {index}: {reason}")]
pub struct FetchError {
    pub index: usize,
    pub reason: String,
}

impl FetchError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// Row-level change notifications produced by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Inserted(usize),
    Deleted(usize),
    Updated(usize),
    ValueChanged { row: usize },
    Reloaded,
    Restored,
}

/// The abstract paged row-store the adapters consume.
pub trait RowStore {
    type Row: Clone;

    /// Rows fetched so far.
    fn row_count(&self) -> usize;

    /// Whether the backing source has no further rows.
    fn is_all_fetched(&self) -> bool;

    /// Fetch until `index` is available (or the source is exhausted).
    fn fetch_to(&mut self, index: usize) -> Result<(), FetchError>;

    /// An already-fetched row.
    fn get_row(&self, index: usize) -> Option<&Self::Row>;

    fn selected_index(&self) -> Option<usize>;

    /// Drain pending change events.
    fn take_events(&mut self) -> Vec<StoreEvent>;
}
