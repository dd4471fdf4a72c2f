//! Directional focus traversal.
//!
//! Given an owner node, computes the next/previous focus target under the
//! traversal root, honoring explicit tab-order indices first and falling
//! back to tree order. Traversal never escapes a modal window's content.

use tracing::trace;

use crate::scene::{NodeId, NodeKind, Scene};

/// Traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Gather the focus candidates under `root` in tree order.
///
/// Pre-order walk honoring each container's reported traversal order.
/// Composite controls contribute themselves as a single leaf; tab containers
/// contribute themselves plus, recursively, only the selected tab's content
/// (hidden tabs must not produce unreachable focus targets).
fn collect(scene: &Scene, root: NodeId, out: &mut Vec<NodeId>) {
    if scene.is_focusable(root) {
        out.push(root);
    }
    match scene.kind(root) {
        Ok(NodeKind::ComboBox) => {
            // Single leaf; sub-elements are never traversed.
        }
        Ok(NodeKind::TabPane) => {
            if let Some(selected) = scene.selected_tab(root) {
                collect(scene, selected, out);
            }
        }
        Ok(_) => {
            for child in scene.traversal_children(root) {
                collect(scene, child, out);
            }
        }
        Err(_) => {}
    }
}

fn gather_all(scene: &Scene, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect(scene, root, &mut out);
    out
}

/// The indexed candidates, ascending by tab-order index. The sort is stable,
/// so equal indices keep their tree order.
fn gather_indexed(scene: &Scene, root: NodeId) -> Vec<NodeId> {
    let mut indexed: Vec<NodeId> = gather_all(scene, root)
        .into_iter()
        .filter(|&n| scene.tab_index(n).is_some())
        .collect();
    indexed.sort_by_key(|&n| scene.tab_index(n).unwrap_or(u32::MAX));
    indexed
}

/// Compute the focus target adjacent to `owner` in the given direction.
///
/// Falls back to `owner` itself when no other candidate exists, so callers
/// never have to handle an absent result.
pub fn select(scene: &Scene, owner: NodeId, direction: Direction) -> NodeId {
    let root = scene.traversal_root(owner);
    let indexed = gather_indexed(scene, root);

    // Interior of the indexed list: O(1) neighbor lookup.
    if let Some(position) = indexed.iter().position(|&n| n == owner) {
        match direction {
            Direction::Next if position + 1 < indexed.len() => return indexed[position + 1],
            Direction::Previous if position > 0 => return indexed[position - 1],
            _ => {}
        }
    }

    // Circular scan over the full candidate list for an unindexed target.
    let all = gather_all(scene, root);
    if let Some(start) = all.iter().position(|&n| n == owner) {
        let boundary = match direction {
            Direction::Next => indexed.first(),
            Direction::Previous => indexed.last(),
        }
        .and_then(|&b| all.iter().position(|&n| n == b));

        let len = all.len();
        let mut position = start;
        for _ in 0..len {
            position = match direction {
                Direction::Next => (position + 1) % len,
                Direction::Previous => (position + len - 1) % len,
            };
            if position == start {
                break;
            }
            let candidate = all[position];
            if scene.tab_index(candidate).is_none() {
                trace!("focus {owner} -> {candidate} (tree order)");
                return candidate;
            }
            if Some(position) == boundary {
                // Entering the indexed list from the wrong side; give up and
                // let the wrap-around below pick the proper end.
                break;
            }
        }
    }

    // Wrap to the indexed list.
    let wrapped = match direction {
        Direction::Next => indexed.first(),
        Direction::Previous => indexed.last(),
    };
    if let Some(&target) = wrapped {
        trace!("focus {owner} -> {target} (indexed wrap)");
        return target;
    }

    // Nothing to go to; stay put rather than navigate into nothing.
    owner
}

/// First focus target under `root`: the indexed list when present, else the
/// first candidate in tree order.
pub fn select_first(scene: &Scene, root: NodeId) -> Option<NodeId> {
    let indexed = gather_indexed(scene, root);
    indexed
        .first()
        .copied()
        .or_else(|| gather_all(scene, root).first().copied())
}

/// Last focus target under `root`.
pub fn select_last(scene: &Scene, root: NodeId) -> Option<NodeId> {
    let indexed = gather_indexed(scene, root);
    indexed
        .last()
        .copied()
        .or_else(|| gather_all(scene, root).last().copied())
}
