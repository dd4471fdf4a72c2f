//! Observable list adapter: store events translated to list changes.

use crate::data::{FetchMode, LazyRowList, RowStore, StoreEvent};

/// Change notification for a bound list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Inserted(usize),
    Removed(usize),
    Updated(usize),
    Reloaded,
}

/// Wraps [`LazyRowList`] and surfaces the store's row-level events as
/// list-change notifications.
#[derive(Debug)]
pub struct ObservableRowList<S: RowStore> {
    list: LazyRowList<S>,
}

impl<S: RowStore> ObservableRowList<S> {
    pub fn new(store: S, batch_size: usize, mode: FetchMode) -> Self {
        Self {
            list: LazyRowList::new(store, batch_size, mode),
        }
    }

    pub fn list(&self) -> &LazyRowList<S> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut LazyRowList<S> {
        &mut self.list
    }

    pub fn size(&self) -> usize {
        self.list.size()
    }

    pub fn get(&mut self, index: usize) -> Option<S::Row> {
        self.list.get(index)
    }

    /// Drain the store's pending events, translated for the view. A restore
    /// is indistinguishable from a reload at the list level.
    pub fn poll_changes(&mut self) -> Vec<ListChange> {
        self.list
            .store_mut()
            .take_events()
            .into_iter()
            .map(|event| match event {
                StoreEvent::Inserted(row) => ListChange::Inserted(row),
                StoreEvent::Deleted(row) => ListChange::Removed(row),
                StoreEvent::Updated(row) => ListChange::Updated(row),
                StoreEvent::ValueChanged { row } => ListChange::Updated(row),
                StoreEvent::Reloaded | StoreEvent::Restored => ListChange::Reloaded,
            })
            .collect()
    }
}
