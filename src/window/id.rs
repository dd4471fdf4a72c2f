//! Type-safe ID types for window management
//!
//! This module provides strongly-typed IDs that:
//! - Cannot be zero (using NonZeroU64)
//! - Cannot be accidentally mixed up (different types)
//! - Are efficient (single u64 internally)
//! - Support atomic generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for windows
///
/// This ID is guaranteed to be:
/// - Non-zero (can use Option<WindowId> without overhead)
/// - Unique within the process lifetime
/// - Type-safe (cannot be confused with other ID types)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct WindowId(NonZeroU64);

/// Atomic counter for generating unique window IDs
/// Starts at 1 to ensure NonZeroU64 is always valid
static WINDOW_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

impl WindowId {
    /// Generate a new unique window ID
    ///
    /// This is guaranteed to never return the same ID twice
    /// within a single process
    pub fn next() -> Self {
        let id = WINDOW_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        // Safety: We start at 1 and only increment, so this is never zero
        WindowId(NonZeroU64::new(id).expect("Window ID counter overflow"))
    }

    /// Create a WindowId from a raw value
    ///
    /// Returns None if the value is zero
    pub fn from_raw(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(WindowId)
    }

    /// Get the raw ID value
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({})", self.0)
    }
}
