//! Minimal retained scene model.
//!
//! veranda does not render anything; this module only keeps the structural
//! facts the library needs about a host UI tree: parent/child order, node
//! kinds, visibility/enablement, explicit tab-order indices, and which tab of
//! a tab container is selected. Focus traversal and the window managers
//! operate on this model instead of walking a toolkit's scene graph.

mod id;

pub use id::NodeId;

use std::collections::HashMap;

use crate::error::{OptionExt, VerandaError, VerandaResult};

/// What a node is, as far as traversal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level frame. The only legal parent for a menu bar.
    Frame,
    /// Plain container; never a focus candidate itself.
    Group,
    /// Content root of a modal window. Confines focus traversal.
    ModalContent,
    /// Focusable leaf control.
    Control,
    /// Composite control treated as a single leaf; children are never
    /// traversed into.
    ComboBox,
    /// Tab container: itself a candidate, plus the selected tab's subtree.
    TabPane,
    /// Menu bar; only attachable to a frame.
    MenuBar,
}

impl NodeKind {
    /// Container-only kinds never appear as focus candidates.
    pub fn container_only(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame | NodeKind::Group | NodeKind::ModalContent | NodeKind::MenuBar
        )
    }
}

/// Child iteration order a container reports for traversal.
///
/// Containers that add children back-to-front for rendering reasons report
/// `Reverse` so traversal still sees document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    Forward,
    Reverse,
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    visible: bool,
    managed: bool,
    enabled: bool,
    focus_traversable: bool,
    tab_index: Option<u32>,
    traversal_order: TraversalOrder,
    /// Index into `children`; meaningful for `TabPane` only.
    selected_tab: usize,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            visible: true,
            managed: true,
            enabled: true,
            focus_traversable: !kind.container_only(),
            tab_index: None,
            traversal_order: TraversalOrder::Forward,
            selected_tab: 0,
        }
    }
}

/// The scene arena. Nodes are created detached and attached explicitly.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: HashMap<NodeId, Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node of the given kind.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::next();
        self.nodes.insert(id, Node::new(kind));
        id
    }

    fn node(&self, id: NodeId) -> VerandaResult<&Node> {
        self.nodes
            .get(&id)
            .ok_or_log(|| VerandaError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> VerandaResult<&mut Node> {
        self.nodes
            .get_mut(&id)
            .ok_or_log(|| VerandaError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Attach `child` under `parent`, appended last.
    ///
    /// Fails fast on structural misuse: unknown ids, an already-attached
    /// child, attaching a node under itself or a descendant, or a menu bar
    /// under anything but a frame.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> VerandaResult<()> {
        if parent == child {
            return Err(VerandaError::InvalidOperation(
                "cannot attach a node to itself".into(),
            ));
        }
        let child_kind = self.node(child)?.kind;
        let parent_kind = self.node(parent)?.kind;
        if self.node(child)?.parent.is_some() {
            return Err(VerandaError::InvalidOperation(format!(
                "{child} is already attached"
            )));
        }
        if child_kind == NodeKind::MenuBar && parent_kind != NodeKind::Frame {
            return Err(VerandaError::InvalidOperation(
                "a menu bar may only be attached to a frame".into(),
            ));
        }
        // Reject cycles: parent must not be a descendant of child.
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return Err(VerandaError::InvalidOperation(format!(
                    "attaching {child} under {parent} would create a cycle"
                )));
            }
            cursor = self.node(current)?.parent;
        }
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Detach `child` from its parent, leaving it (and its subtree) alive.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> VerandaResult<()> {
        let position = self
            .node(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or_log(|| {
                VerandaError::InvalidOperation(format!("{child} is not a child of {parent}"))
            })?;
        self.node_mut(parent)?.children.remove(position);
        self.node_mut(child)?.parent = None;
        Ok(())
    }

    /// Remove a node and its whole subtree from the scene.
    pub fn remove_subtree(&mut self, id: NodeId) -> VerandaResult<()> {
        if let Some(parent) = self.node(id)?.parent {
            self.remove_child(parent, id)?;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    pub fn kind(&self, id: NodeId) -> VerandaResult<NodeKind> {
        Ok(self.node(id)?.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Children in insertion order, regardless of traversal order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Children in the order the container reports for traversal.
    pub fn traversal_children(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::new();
        };
        match node.traversal_order {
            TraversalOrder::Forward => node.children.clone(),
            TraversalOrder::Reverse => node.children.iter().rev().copied().collect(),
        }
    }

    /// Walk up to the tree root, stopping early at a modal content boundary.
    /// Traversal must never escape the active modal window.
    pub fn traversal_root(&self, id: NodeId) -> NodeId {
        let mut current = id;
        loop {
            if self
                .nodes
                .get(&current)
                .is_some_and(|n| n.kind == NodeKind::ModalContent)
            {
                return current;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> VerandaResult<()> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn set_managed(&mut self, id: NodeId, managed: bool) -> VerandaResult<()> {
        self.node_mut(id)?.managed = managed;
        Ok(())
    }

    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) -> VerandaResult<()> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    pub fn set_focus_traversable(&mut self, id: NodeId, traversable: bool) -> VerandaResult<()> {
        self.node_mut(id)?.focus_traversable = traversable;
        Ok(())
    }

    pub fn set_tab_index(&mut self, id: NodeId, index: Option<u32>) -> VerandaResult<()> {
        self.node_mut(id)?.tab_index = index;
        Ok(())
    }

    pub fn tab_index(&self, id: NodeId) -> Option<u32> {
        self.nodes.get(&id).and_then(|n| n.tab_index)
    }

    pub fn set_traversal_order(&mut self, id: NodeId, order: TraversalOrder) -> VerandaResult<()> {
        self.node_mut(id)?.traversal_order = order;
        Ok(())
    }

    /// Select a tab of a tab pane by child position.
    pub fn set_selected_tab(&mut self, id: NodeId, tab: usize) -> VerandaResult<()> {
        let node = self.node(id)?;
        if node.kind != NodeKind::TabPane {
            return Err(VerandaError::InvalidOperation(format!(
                "{id} is not a tab pane"
            )));
        }
        if tab >= node.children.len() {
            return Err(VerandaError::InvalidOperation(format!(
                "tab {tab} out of range for {id}"
            )));
        }
        self.node_mut(id)?.selected_tab = tab;
        Ok(())
    }

    pub fn selected_tab(&self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(&id)?;
        if node.kind != NodeKind::TabPane {
            return None;
        }
        node.children.get(node.selected_tab).copied()
    }

    /// Whether a node qualifies as a focus candidate: accepts focus, is
    /// visible, laid out, enabled, and is not a container-only wrapper.
    pub fn is_focusable(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| {
            n.focus_traversable
                && n.visible
                && n.managed
                && n.enabled
                && !n.kind.container_only()
        })
    }
}
