//! Type-safe scene node identifiers.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for scene nodes
///
/// This ID is guaranteed to be:
/// - Non-zero (can use Option<NodeId> without overhead)
/// - Unique within the process lifetime
/// - Type-safe (cannot be confused with other ID types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU64);

/// Atomic counter for generating unique node IDs
/// Starts at 1 to ensure NonZeroU64 is always valid
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

impl NodeId {
    /// Generate a new unique node ID
    pub fn next() -> Self {
        let id = NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        // Safety: We start at 1 and only increment, so this is never zero
        NodeId(NonZeroU64::new(id).expect("Node ID counter overflow"))
    }

    /// Create a NodeId from a raw value
    ///
    /// Returns None if the value is zero
    pub fn from_raw(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(NodeId)
    }

    /// Get the raw ID value
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_is_unique() {
        let id1 = NodeId::next();
        let id2 = NodeId::next();
        assert_ne!(id1, id2);
    }

    #[test]
    fn node_id_from_raw_rejects_zero() {
        assert!(NodeId::from_raw(0).is_none());
        assert!(NodeId::from_raw(1).is_some());
    }
}
