// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core document implementation: structure, updates, queries.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{Element, NodeData, NodeFlags, NodeId};

/// An in-memory document tree of elements and text nodes.
///
/// The first node inserted without a parent becomes the document root
/// (conventionally the `body`). Geometry is not computed here: every element
/// carries the absolute border box that upstream layout assigned to it.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_layout_tree::{Document, Element};
///
/// let mut doc = Document::new();
/// let body = doc.insert_element(None, Element::new("body"));
/// let p = doc.insert_element(
///     Some(body),
///     Element::new("p").with_box(Rect::new(0.0, 0.0, 200.0, 20.0)),
/// );
/// let text = doc.insert_text(p, "hello");
///
/// assert_eq!(doc.root(), Some(body));
/// assert_eq!(doc.first_child(p), Some(text));
/// assert_eq!(doc.text(text), Some("hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
}

/// Children form a doubly linked sibling list, so every navigation step is O(1).
#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    data: NodeData,
    flags: NodeFlags,
}

impl Node {
    fn new(generation: u32, data: NodeData, flags: NodeFlags) -> Self {
        Self {
            generation,
            parent: None,
            first_child: None,
            last_child: None,
            prev: None,
            next: None,
            data,
            flags,
        }
    }
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document root, if one has been inserted and is still live.
    pub fn root(&self) -> Option<NodeId> {
        self.root.filter(|&r| self.is_alive(r))
    }

    /// Insert an element as the last child of `parent` (or as the root if `None`).
    pub fn insert_element(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        self.insert(parent, NodeData::Element(element), NodeFlags::empty())
    }

    /// Insert an element flagged with `flags` as the last child of `parent`.
    pub fn insert_element_with_flags(
        &mut self,
        parent: Option<NodeId>,
        element: Element,
        flags: NodeFlags,
    ) -> NodeId {
        self.insert(parent, NodeData::Element(element), flags)
    }

    /// Append a text node to `parent`.
    pub fn insert_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.insert(Some(parent), NodeData::Text(text.into()), NodeFlags::empty())
    }

    fn insert(&mut self, parent: Option<NodeId>, data: NodeData, flags: NodeFlags) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data, flags));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data, flags)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        match parent {
            Some(p) if self.is_alive(p) => self.link_parent(id, p),
            _ => {
                if self.root().is_none() {
                    self.root = Some(id);
                }
            }
        }
        id
    }

    /// Remove a node (and its subtree) from the document.
    ///
    /// Stale identifiers are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        // Each child unlinks itself, so keep taking the first one.
        while let Some(child) = self.node(id).first_child {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        if self.root == Some(id) {
            self.root = None;
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether the document has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload of a live node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// Element payload of a live element node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.data(id).and_then(NodeData::as_element)
    }

    /// Mutable element payload of a live element node.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_opt_mut(id)?.data {
            NodeData::Element(e) => Some(e),
            NodeData::Text(_) => None,
        }
    }

    /// Text payload of a live text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.data(id).and_then(NodeData::as_text)
    }

    /// Update the border box of an element. No-op for text or stale ids.
    pub fn set_border_box(&mut self, id: NodeId, border_box: Rect) {
        if let Some(e) = self.element_mut(id) {
            e.border_box = border_box;
        }
    }

    /// Set one style declaration on an element. No-op for text or stale ids.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.style.set(property, value);
        }
    }

    /// Returns the flags of a node if the identifier is live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.flags)
    }

    /// Update node flags.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.flags = flags;
        }
    }

    /// Whether this node or any ancestor is inert or an overlay.
    pub fn is_excluded(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.node_opt(c)) {
            if node.flags.is_excluded() {
                return true;
            }
            current = node.parent;
        }
        false
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Iterate the children of a node in order; empty if the node is stale.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self.first_child(id);
        core::iter::from_fn(move || {
            let current = next?;
            next = self.next_sibling(current);
            Some(current)
        })
    }

    /// First child of a live node.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.first_child)
    }

    /// Next sibling of a live node, text nodes included.
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.node_opt(node).and_then(|n| n.next)
    }

    /// Get the next node in depth-first (document) order.
    ///
    /// Returns `None` if no next node exists or if the current node is stale.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if !self.is_alive(current) {
            return None;
        }
        if let Some(first_child) = self.first_child(current) {
            return Some(first_child);
        }
        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    /// Iterate live overlay nodes in document order.
    pub fn overlays(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self.root();
        core::iter::from_fn(move || {
            while let Some(id) = next {
                next = self.next_depth_first(id);
                if self
                    .flags(id)
                    .is_some_and(|f| f.contains(NodeFlags::OVERLAY))
                {
                    return Some(id);
                }
            }
            None
        })
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let last = self.node(parent).last_child;
        match last {
            Some(last) => self.node_mut(last).next = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
        self.node_mut(parent).last_child = Some(id);
        let node = self.node_mut(id);
        node.parent = Some(parent);
        node.prev = last;
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let node = self.node_mut(id);
        let (prev, next) = (node.prev.take(), node.next.take());
        node.parent = None;
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.node_mut(parent).last_child = prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> (Document, NodeId, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.insert_element(None, Element::new("body"));
        let a = doc.insert_element(Some(body), Element::new("div"));
        let t = doc.insert_text(a, "text");
        let b = doc.insert_element(Some(body), Element::new("div"));
        (doc, body, a, t, b)
    }

    #[test]
    fn first_parentless_node_is_root() {
        let (mut doc, body, ..) = sample();
        let stray = doc.insert_element(None, Element::new("div"));
        assert_eq!(doc.root(), Some(body), "later parentless nodes do not replace the root");
        assert_eq!(doc.parent_of(stray), None);
    }

    #[test]
    fn siblings_and_depth_first_order() {
        let (doc, body, a, t, b) = sample();
        assert_eq!(doc.next_sibling(a), Some(b));
        assert_eq!(doc.next_sibling(b), None);
        assert_eq!(doc.next_sibling(body), None, "the root has no siblings");

        let mut order = vec![body];
        let mut cur = body;
        while let Some(n) = doc.next_depth_first(cur) {
            order.push(n);
            cur = n;
        }
        assert_eq!(order, vec![body, a, t, b]);
    }

    #[test]
    fn remove_frees_subtree_and_bumps_generation() {
        let (mut doc, body, a, t, b) = sample();
        doc.remove(a);
        assert!(!doc.is_alive(a), "removed node is stale");
        assert!(!doc.is_alive(t), "descendants are removed too");
        assert_eq!(doc.children_of(body).collect::<Vec<_>>(), [b]);

        let c = doc.insert_element(Some(body), Element::new("span"));
        assert!(!doc.is_alive(a), "reused slot does not revive the old id");
        assert!(doc.is_alive(c));
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn removing_from_the_middle_relinks_siblings() {
        let mut doc = Document::new();
        let body = doc.insert_element(None, Element::new("body"));
        let [a, b, c] =
            ["a", "b", "c"].map(|tag| doc.insert_element(Some(body), Element::new(tag)));
        doc.remove(b);
        assert_eq!(doc.next_sibling(a), Some(c));
        assert_eq!(doc.children_of(body).collect::<Vec<_>>(), [a, c]);

        doc.remove(c);
        let d = doc.insert_element(Some(body), Element::new("d"));
        assert_eq!(
            doc.children_of(body).collect::<Vec<_>>(),
            [a, d],
            "appends after the new last child"
        );

        doc.remove(a);
        doc.remove(d);
        assert_eq!(doc.first_child(body), None);
        let e = doc.insert_element(Some(body), Element::new("e"));
        assert_eq!(doc.first_child(body), Some(e));
        assert_eq!(doc.next_sibling(e), None);
    }

    #[test]
    fn exclusion_is_inherited_from_ancestors() {
        let (mut doc, body, a, t, b) = sample();
        doc.set_flags(a, NodeFlags::INERT);
        assert!(doc.is_excluded(a));
        assert!(doc.is_excluded(t), "text inside an inert subtree is excluded");
        assert!(!doc.is_excluded(b));
        assert!(!doc.is_excluded(body));
    }

    #[test]
    fn overlays_are_listed_in_document_order() {
        let (mut doc, body, ..) = sample();
        let o1 = doc.insert_element_with_flags(Some(body), Element::new("div"), NodeFlags::OVERLAY);
        let o2 = doc.insert_element_with_flags(Some(body), Element::new("div"), NodeFlags::OVERLAY);
        assert_eq!(doc.overlays().collect::<Vec<_>>(), vec![o1, o2]);
        doc.remove(o1);
        assert_eq!(doc.overlays().collect::<Vec<_>>(), vec![o2]);
    }

    #[test]
    fn element_mutators_ignore_text_nodes() {
        let (mut doc, _, a, t, _) = sample();
        doc.set_border_box(t, Rect::new(0.0, 0.0, 1.0, 1.0));
        doc.set_style(t, "margin-top", "1px");
        assert!(doc.element(t).is_none());
        doc.set_style(a, "margin-top", "1px");
        assert_eq!(
            doc.element(a).and_then(|e| e.style.get("margin-top")),
            Some("1px")
        );
    }
}
