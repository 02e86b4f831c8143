// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: node identifiers, flags, and node payloads.

use alloc::string::String;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::style::Style;

/// Identifier for a node in the document (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling whether inspectors look at a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// Node (and its subtree) must not be measured or annotated,
        /// for example an inspector's own control surface.
        const INERT   = 0b0000_0001;
        /// Node is an overlay marker inserted by an inspector.
        const OVERLAY = 0b0000_0010;
    }
}

impl NodeFlags {
    /// Whether inspectors should skip this node and its subtree.
    pub const fn is_excluded(self) -> bool {
        self.intersects(Self::INERT.union(Self::OVERLAY))
    }
}

/// An element node: tag, classes, resolved style and absolute border box.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Tag name, e.g. `div`.
    pub tag: String,
    /// Class list in source order.
    pub classes: SmallVec<[String; 2]>,
    /// Resolved style declarations.
    pub style: Style,
    /// Border box in document (absolute) coordinates.
    pub border_box: Rect,
}

impl Element {
    /// Create an element with an empty style and a zero-sized box.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder: set the absolute border box.
    pub fn with_box(mut self, border_box: Rect) -> Self {
        self.border_box = border_box;
        self
    }

    /// Builder: set one declaration. Shorthands expand as in [`Style::set`].
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.set(property, value);
        self
    }

    /// Builder: append a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Payload of a node.
#[derive(Clone, Debug)]
pub enum NodeData {
    /// An element.
    Element(Element),
    /// A raw text node.
    Text(String),
}

impl NodeData {
    /// The element payload, if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(t) => Some(t),
        }
    }
}
