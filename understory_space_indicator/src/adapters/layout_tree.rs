// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host implementation for Understory Layout Tree.
//!
//! ## Feature
//!
//! Enable with `layout_tree_adapter` (on by default).
//!
//! ## Notes
//!
//! Markers become `div` elements appended to the document root, flagged
//! [`NodeFlags::OVERLAY`] so later traversals skip them. Each carries the
//! marker's class name, an absolute-positioning style with
//! `pointer-events: none`, a border box equal to the marker rectangle, and a
//! text child holding the label.

use alloc::borrow::Cow;
use alloc::format;

use kurbo::Rect;
use understory_layout_tree::{Document, Element, NodeData, NodeFlags, NodeId};

use crate::host::{LayoutHost, NodeKind, OverlayHost};
use crate::overlay::{MarkerSpec, MaterializeError};
use crate::style::StyleProperty;

impl LayoutHost for Document {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Self::root(self)
    }

    fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.data(node).map(|d| match d {
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
        })
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        Self::first_child(self, node)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        Self::next_sibling(self, node)
    }

    fn is_excluded(&self, node: NodeId) -> bool {
        Self::is_excluded(self, node)
    }

    fn style(&self, node: NodeId, property: StyleProperty) -> Option<Cow<'_, str>> {
        self.element(node)?
            .style
            .get(property.css_name())
            .map(Cow::Borrowed)
    }

    fn border_box(&self, node: NodeId) -> Option<Rect> {
        self.element(node).map(|e| e.border_box)
    }
}

impl OverlayHost for Document {
    type Marker = NodeId;

    fn insert_marker(&mut self, spec: &MarkerSpec<'_>) -> Result<NodeId, MaterializeError> {
        let root = Self::root(self).ok_or(MaterializeError::NoDocument)?;
        let r = spec.rect;
        let mut element = Element::new("div")
            .with_class(spec.class.class_name())
            .with_box(r)
            .with_style("position", "absolute")
            .with_style("box-sizing", "border-box")
            .with_style("pointer-events", "none")
            .with_style("top", &format!("{}px", r.y0))
            .with_style("left", &format!("{}px", r.x0))
            .with_style("width", &format!("{}px", r.width()))
            .with_style("height", &format!("{}px", r.height()))
            .with_style("z-index", &format!("{}", spec.z_index))
            .with_style("background-color", &format!("{}", spec.background));
        if let Some((edge, color)) = spec.border {
            element.style.set(
                &format!("border-{}", edge.css_name()),
                &format!("1px solid {color}"),
            );
        }
        let marker = self.insert_element_with_flags(Some(root), element, NodeFlags::OVERLAY);
        self.insert_text(marker, spec.label);
        Ok(marker)
    }

    fn remove_marker(&mut self, marker: NodeId) {
        self.remove(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::MarkerClass;
    use crate::palette::Rgba;
    use crate::snapshot::{ReadError, read};
    use crate::types::Edge;
    use alloc::vec::Vec;

    fn doc_with_body() -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.insert_element(None, Element::new("body"));
        (doc, body)
    }

    #[test]
    fn reads_styles_through_longhand_names() {
        let (mut doc, body) = doc_with_body();
        let div = doc.insert_element(
            Some(body),
            Element::new("div").with_style("padding", "1px 2px"),
        );
        assert_eq!(
            LayoutHost::style(&doc, div, StyleProperty::PaddingRight).as_deref(),
            Some("2px")
        );
        assert_eq!(LayoutHost::style(&doc, div, StyleProperty::FontSize), None);
        let text = doc.insert_text(div, "x");
        assert_eq!(LayoutHost::style(&doc, text, StyleProperty::FontSize), None);
        assert_eq!(LayoutHost::kind(&doc, text), Some(NodeKind::Text));
    }

    #[test]
    fn next_element_sibling_skips_text() {
        let (mut doc, body) = doc_with_body();
        let a = doc.insert_element(Some(body), Element::new("p"));
        doc.insert_text(body, "between");
        let b = doc.insert_element(Some(body), Element::new("p"));
        assert_eq!(doc.next_element_sibling(a), Some(b));
        assert_eq!(doc.next_element_sibling(b), None);
    }

    #[test]
    fn owns_direct_text_ignores_nested_text() {
        let (mut doc, body) = doc_with_body();
        let outer = doc.insert_element(Some(body), Element::new("div"));
        let inner = doc.insert_element(Some(outer), Element::new("span"));
        doc.insert_text(inner, "leaf");
        assert!(!doc.owns_direct_text(outer));
        assert!(doc.owns_direct_text(inner));
    }

    #[test]
    fn markers_are_appended_as_excluded_overlays() {
        let (mut doc, body) = doc_with_body();
        let content = doc.insert_element(Some(body), Element::new("div"));
        let spec = MarkerSpec {
            class: MarkerClass::Space,
            rect: Rect::new(10.0, 20.0, 110.0, 25.0),
            label: "5px",
            background: Rgba::new(255, 255, 0, 0.8),
            border: Some((Edge::Bottom, Rgba::new(0, 0, 255, 1.0))),
            z_index: 9999,
        };
        let marker = doc.insert_marker(&spec).unwrap();

        assert_eq!(
            doc.children_of(body).collect::<Vec<_>>(),
            [content, marker],
            "appended last"
        );
        assert!(LayoutHost::is_excluded(&doc, marker));
        let e = doc.element(marker).unwrap();
        assert!(e.has_class("space-indicator"));
        assert_eq!(e.border_box, spec.rect);
        assert_eq!(e.style.get("pointer-events"), Some("none"));
        assert_eq!(e.style.get("position"), Some("absolute"));
        assert_eq!(e.style.get("top"), Some("20px"));
        assert_eq!(e.style.get("width"), Some("100px"));
        assert_eq!(e.style.get("height"), Some("5px"));
        assert_eq!(e.style.get("border-bottom"), Some("1px solid rgba(0, 0, 255, 1)"));
        let label = doc.first_child(marker).unwrap();
        assert_eq!(doc.text(label), Some("5px"));

        doc.remove_marker(marker);
        assert!(!doc.is_alive(marker));
        assert!(!doc.is_alive(label));
        assert_eq!(doc.children_of(body).collect::<Vec<_>>(), [content]);
    }

    #[test]
    fn exclusion_covers_whole_inert_subtree() {
        let (mut doc, body) = doc_with_body();
        let panel =
            doc.insert_element_with_flags(Some(body), Element::new("div"), NodeFlags::INERT);
        let button = doc.insert_element(Some(panel), Element::new("button"));
        let content = doc.insert_element(Some(body), Element::new("div"));
        assert!(LayoutHost::is_excluded(&doc, panel));
        assert!(LayoutHost::is_excluded(&doc, button), "inherited from the panel");
        assert!(!LayoutHost::is_excluded(&doc, content));
    }

    #[test]
    fn removed_nodes_read_as_stale() {
        let (mut doc, body) = doc_with_body();
        let div = doc.insert_element(
            Some(body),
            Element::new("div").with_box(Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        let text = doc.insert_text(div, "x");
        assert_eq!(read(&doc, text), Err(ReadError::NotAnElement));
        assert!(read(&doc, div).is_ok());
        doc.remove(div);
        assert_eq!(read(&doc, div), Err(ReadError::StaleNode));
    }

    #[test]
    fn insert_without_root_fails() {
        let mut doc = Document::new();
        let spec = MarkerSpec {
            class: MarkerClass::Dimension,
            rect: Rect::ZERO,
            label: "0px x 0px",
            background: Rgba::new(0, 0, 0, 0.0),
            border: None,
            z_index: 9999,
        };
        assert_eq!(doc.insert_marker(&spec), Err(MaterializeError::NoDocument));
    }
}
