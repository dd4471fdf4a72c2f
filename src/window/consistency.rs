//! Window state consistency checks
//!
//! Debug-mode checks to ensure window state remains consistent across
//! the multiple places windows are tracked.

use crate::window::{WindowId, WindowRegistry};
use tracing::error;

/// Check consistency between a manager's registry, its z-order list, and its
/// designated active window
#[cfg(debug_assertions)]
pub fn check_consistency(
    registry: &WindowRegistry,
    z_order: &[WindowId],
    active: Option<WindowId>,
) -> bool {
    let mut is_consistent = true;

    // Check 1: z-order entries are unique
    for (i, id) in z_order.iter().enumerate() {
        if z_order[i + 1..].contains(id) {
            error!("Window {} appears twice in z-order", id);
            is_consistent = false;
        }
    }

    // Check 2: every z-order entry exists in the registry
    for id in z_order {
        if registry.get(*id).is_none() {
            error!("Z-order lists window {} but it's not in the registry", id);
            is_consistent = false;
        }
    }

    // Check 3: every registered window appears in the z-order
    for (id, _) in registry.iter() {
        if !z_order.contains(&id) {
            error!("Window {} in registry but missing from z-order", id);
            is_consistent = false;
        }
    }

    // Check 4: the designated active window is registered, and the active
    // flag is set on it and nowhere else
    if let Some(active_id) = active {
        if registry.get(active_id).is_none() {
            error!("Active window {} not in registry", active_id);
            is_consistent = false;
        }
    }
    for (id, window) in registry.iter() {
        let should_be_active = Some(id) == active;
        if window.is_active() != should_be_active {
            error!(
                "Window {} active flag is {} but designated active is {:?}",
                id,
                window.is_active(),
                active
            );
            is_consistent = false;
        }
    }

    if !is_consistent {
        error!("Window state consistency check FAILED");
    }

    is_consistent
}

/// No-op in release builds
#[cfg(not(debug_assertions))]
pub fn check_consistency(
    _registry: &WindowRegistry,
    _z_order: &[WindowId],
    _active: Option<WindowId>,
) -> bool {
    true
}
