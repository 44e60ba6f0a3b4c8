// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot arena backing a root's sections and rows.
//!
//! Sections are top-level nodes (no parent). Rows record their section as a
//! non-owning parent handle, and each section records its rows in order.
//! Ownership flows only downward through the slots; the parent handle is used
//! for upward lookups and is resolved through the arena.

use alloc::vec::Vec;

use crate::element::Element;
use crate::section::SectionNode;

/// Identifier for a node in the arena (slot index, generation).
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On removal, the slot is freed; any existing id that pointed to it is stale.
/// - On reuse of a freed slot, its generation is incremented.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Section(SectionNode),
    Element(Element),
}

#[derive(Debug)]
pub(crate) struct Node {
    generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    fn new(generation: u32, kind: NodeKind) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }
}

/// Slot storage for sections and rows.
#[derive(Default)]
pub(crate) struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Insert a node, appending it to `parent`'s children when given.
    pub(crate) fn insert(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p, None);
        }
        id
    }

    /// Insert a node at position `index` among `parent`'s children.
    pub(crate) fn insert_at(&mut self, parent: NodeId, index: usize, kind: NodeKind) -> NodeId {
        let id = self.insert(None, kind);
        self.link_parent(id, parent, Some(index));
        id
    }

    /// Detach a node from its parent and free its slot, returning it.
    ///
    /// Children are not freed; callers that remove a section take its rows first.
    pub(crate) fn take(&mut self, id: NodeId) -> Option<Node> {
        if !self.is_alive(id) {
            return None;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let node = self.nodes[id.idx()].take();
        self.free_list.push(id.idx());
        node
    }

    /// Move `id` under `new_parent` at `index` (or at the end), overwriting its back-reference.
    pub(crate) fn reparent(&mut self, id: NodeId, new_parent: NodeId, index: Option<usize>) {
        if !self.is_alive(id) || !self.is_alive(new_parent) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        self.link_parent(id, new_parent, index);
    }

    /// Returns true if `id` refers to a live node.
    pub(crate) fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    pub(crate) fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.get(id)?.kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Section(_) => None,
        }
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Element(e) => Some(e),
            NodeKind::Section(_) => None,
        }
    }

    pub(crate) fn section(&self, id: NodeId) -> Option<&SectionNode> {
        match &self.get(id)?.kind {
            NodeKind::Section(s) => Some(s),
            NodeKind::Element(_) => None,
        }
    }

    pub(crate) fn section_mut(&mut self, id: NodeId) -> Option<&mut SectionNode> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Section(s) => Some(s),
            NodeKind::Element(_) => None,
        }
    }

    /// Children of `id` in order; empty for stale ids.
    pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }

    /// Panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId, index: Option<usize>) {
        let parent_node = self.node_mut(parent);
        match index {
            Some(i) if i < parent_node.children.len() => parent_node.children.insert(i, id),
            _ => parent_node.children.push(id),
        }
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::StringElement;

    fn row(caption: &str) -> NodeKind {
        NodeKind::Element(StringElement::new(caption).into())
    }

    #[test]
    fn liveness_insert_take_reuse() {
        let mut tree = Tree::default();
        let section = tree.insert(None, NodeKind::Section(SectionNode::default()));
        let a = tree.insert(Some(section), row("a"));
        assert!(tree.is_alive(a));
        assert_eq!(tree.parent(a), Some(section));

        let taken = tree.take(a).expect("live node");
        assert_eq!(
            taken.parent,
            None,
            "taking a node clears its back-reference"
        );
        assert!(!tree.is_alive(a));
        assert!(tree.children(section).is_empty());

        let b = tree.insert(Some(section), row("b"));
        assert!(tree.is_alive(b));
        assert!(!tree.is_alive(a), "stale ids never alias a reused slot");
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn insert_at_orders_children() {
        let mut tree = Tree::default();
        let section = tree.insert(None, NodeKind::Section(SectionNode::default()));
        let a = tree.insert(Some(section), row("a"));
        let c = tree.insert(Some(section), row("c"));
        let b = tree.insert_at(section, 1, row("b"));
        assert_eq!(tree.children(section), &[a, b, c]);
        let d = tree.insert_at(section, 99, row("d"));
        assert_eq!(tree.children(section).last(), Some(&d));
    }

    #[test]
    fn reparent_overwrites_back_reference() {
        let mut tree = Tree::default();
        let s1 = tree.insert(None, NodeKind::Section(SectionNode::default()));
        let s2 = tree.insert(None, NodeKind::Section(SectionNode::default()));
        let a = tree.insert(Some(s1), row("a"));
        tree.reparent(a, s2, None);
        assert_eq!(tree.parent(a), Some(s2));
        assert!(tree.children(s1).is_empty());
        assert_eq!(tree.children(s2), &[a]);
    }

    #[test]
    fn kind_accessors_distinguish_sections_and_rows() {
        let mut tree = Tree::default();
        let section = tree.insert(None, NodeKind::Section(SectionNode::default()));
        let a = tree.insert(Some(section), row("a"));
        assert!(tree.section(section).is_some());
        assert!(tree.element(section).is_none());
        assert!(tree.element(a).is_some());
        assert!(tree.section_mut(a).is_none());
    }
}
