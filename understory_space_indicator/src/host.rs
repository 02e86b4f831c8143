// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host traits: how the engine reads layout and inserts markers.
//!
//! A host is whatever owns the rendered document: a browser binding, a
//! recorded page, or `understory_layout_tree::Document` via the
//! `layout_tree_adapter` feature. The engine only reads through
//! [`LayoutHost`] and only writes through [`OverlayHost`].

use alloc::borrow::Cow;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

use crate::overlay::{MarkerSpec, MaterializeError};
use crate::style::StyleProperty;

/// Kind of a document node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element with style and geometry.
    Element,
    /// A raw text node.
    Text,
}

/// Read-only view of a laid-out document.
///
/// All positions are absolute document coordinates.
pub trait LayoutHost {
    /// Node identifier. Must stay valid until the document is mutated.
    type Node: Copy + Eq + Hash + Debug;

    /// The traversal root (conventionally `body`). It is not annotated itself.
    fn root(&self) -> Option<Self::Node>;

    /// Kind of `node`, or `None` if the host no longer knows it.
    fn kind(&self, node: Self::Node) -> Option<NodeKind>;

    /// First child of `node`, text nodes included.
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    /// Next sibling of `node`, text nodes included.
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` is inert or an overlay marker. Excluded nodes are
    /// skipped together with their subtree.
    fn is_excluded(&self, node: Self::Node) -> bool;

    /// Resolved value of `property`, as a computed-style query would report it.
    fn style(&self, node: Self::Node, property: StyleProperty) -> Option<Cow<'_, str>>;

    /// Absolute border box of an element.
    fn border_box(&self, node: Self::Node) -> Option<Rect>;

    /// The immediately following element sibling, skipping text nodes.
    fn next_element_sibling(&self, node: Self::Node) -> Option<Self::Node> {
        let mut current = self.next_sibling(node);
        while let Some(n) = current {
            if self.kind(n) == Some(NodeKind::Element) {
                return Some(n);
            }
            current = self.next_sibling(n);
        }
        None
    }

    /// Whether at least one immediate child of `node` is a text node.
    ///
    /// Text that only appears deeper in the subtree does not count.
    fn owns_direct_text(&self, node: Self::Node) -> bool {
        let mut child = self.first_child(node);
        while let Some(c) = child {
            if self.kind(c) == Some(NodeKind::Text) {
                return true;
            }
            child = self.next_sibling(c);
        }
        false
    }
}

/// A host that can also insert and remove overlay markers.
pub trait OverlayHost: LayoutHost {
    /// Host-side reference to an inserted marker.
    type Marker: Debug;

    /// Insert a marker described by `spec`.
    ///
    /// The marker must not take part in layout, must not intercept pointer
    /// input, and must report [`LayoutHost::is_excluded`] as `true`.
    fn insert_marker(&mut self, spec: &MarkerSpec<'_>) -> Result<Self::Marker, MaterializeError>;

    /// Remove a marker previously returned by [`OverlayHost::insert_marker`].
    fn remove_marker(&mut self, marker: Self::Marker);
}
