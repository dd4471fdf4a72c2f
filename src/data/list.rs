//! Lazily-fetching list view over a paged row-store.

use tracing::debug;

use crate::data::{FetchMode, RowStore};
use crate::error::{VerandaError, VerandaResult};

/// List adapter with batch/lazy fetch.
#[derive(Debug)]
pub struct LazyRowList<S: RowStore> {
    store: S,
    batch_size: usize,
    mode: FetchMode,
}

impl<S: RowStore> LazyRowList<S> {
    pub fn new(store: S, batch_size: usize, mode: FetchMode) -> Self {
        Self {
            store,
            batch_size,
            mode,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    /// The size reported to the host view.
    ///
    /// In automatic mode this is one batch larger than what is actually
    /// fetched until the store reports fully fetched, so the host's
    /// virtualization keeps requesting rows.
    pub fn size(&self) -> usize {
        let fetched = self.store.row_count();
        match self.mode {
            FetchMode::Manual => fetched,
            FetchMode::Automatic => {
                if self.store.is_all_fetched() {
                    fetched
                } else {
                    fetched + self.batch_size
                }
            }
        }
    }

    /// Fetch through the store and return the row at `index`.
    ///
    /// A fetch failure past the available range is an expected boundary
    /// condition: the last available row is returned instead.
    pub fn get(&mut self, index: usize) -> Option<S::Row> {
        if index >= self.store.row_count() && !self.store.is_all_fetched() {
            if let Err(err) = self.store.fetch_to(index) {
                debug!("Treating fetch failure as end of data: {err}");
            }
        }
        let count = self.store.row_count();
        if count == 0 {
            return None;
        }
        self.store.get_row(index.min(count - 1)).cloned()
    }

    /// Like [`get`](Self::get), but a missing row is an essential failure:
    /// the fetch error is wrapped and re-raised with its cause preserved.
    pub fn get_required(&mut self, index: usize) -> VerandaResult<S::Row> {
        if index >= self.store.row_count() && !self.store.is_all_fetched() {
            self.store
                .fetch_to(index)
                .map_err(|err| VerandaError::Store {
                    operation: "fetch required row",
                    source: Box::new(err),
                })?;
        }
        self.store
            .get_row(index)
            .cloned()
            .ok_or_else(|| VerandaError::Store {
                operation: "fetch required row",
                source: Box::new(crate::data::FetchError::new(index, "row not available")),
            })
    }

    /// The store's selected row, if any.
    pub fn selected(&self) -> Option<S::Row> {
        let index = self.store.selected_index()?;
        self.store.get_row(index).cloned()
    }
}
