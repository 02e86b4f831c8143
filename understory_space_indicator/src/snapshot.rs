// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout snapshots: resolved box-model values of one element.

use core::fmt;

use kurbo::{Insets, Rect};

use crate::host::{LayoutHost, NodeKind};
use crate::style::{StyleProperty, parse_px};
use crate::types::Edge;

/// Resolved geometry and box-model values of one element at one instant.
///
/// Snapshots are taken fresh on every refresh and never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    /// Absolute border box (`x0` = left, `y0` = top, `x1` = right, `y1` = bottom).
    pub border_box: Rect,
    /// Margin widths (`x0` = left, `y0` = top, `x1` = right, `y1` = bottom).
    pub margin: Insets,
    /// Padding widths, same layout as `margin`.
    pub padding: Insets,
    /// Resolved font size in pixels.
    pub font_size_px: f64,
    /// `display: none`.
    pub display_none: bool,
    /// `visibility: hidden`.
    pub visibility_hidden: bool,
}

impl LayoutSnapshot {
    /// A visible snapshot with the given border box and no margin or padding.
    pub fn from_box(border_box: Rect) -> Self {
        Self {
            border_box,
            margin: Insets::ZERO,
            padding: Insets::ZERO,
            font_size_px: 0.0,
            display_none: false,
            visibility_hidden: false,
        }
    }

    /// Whether the element is hidden and must not be annotated.
    pub fn is_hidden(&self) -> bool {
        self.display_none || self.visibility_hidden
    }

    /// Top of the border box.
    pub fn top(&self) -> f64 {
        self.border_box.y0
    }

    /// Left of the border box.
    pub fn left(&self) -> f64 {
        self.border_box.x0
    }

    /// Right of the border box.
    pub fn right(&self) -> f64 {
        self.border_box.x1
    }

    /// Bottom of the border box.
    pub fn bottom(&self) -> f64 {
        self.border_box.y1
    }

    /// Border-box width.
    pub fn width(&self) -> f64 {
        self.border_box.width()
    }

    /// Border-box height.
    pub fn height(&self) -> f64 {
        self.border_box.height()
    }

    /// Margin on `edge`.
    pub fn margin_on(&self, edge: Edge) -> f64 {
        inset_on(self.margin, edge)
    }

    /// Padding on `edge`.
    pub fn padding_on(&self, edge: Edge) -> f64 {
        inset_on(self.padding, edge)
    }
}

fn inset_on(insets: Insets, edge: Edge) -> f64 {
    match edge {
        Edge::Top => insets.y0,
        Edge::Right => insets.x1,
        Edge::Bottom => insets.y1,
        Edge::Left => insets.x0,
    }
}

/// Why a node could not be measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// The host no longer knows the node.
    StaleNode,
    /// The node is a text node; only elements have a box model.
    NotAnElement,
    /// A visible element without a border box.
    MissingBorderBox,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleNode => f.write_str("node is no longer part of the document"),
            Self::NotAnElement => f.write_str("node is not an element"),
            Self::MissingBorderBox => f.write_str("visible element has no border box"),
        }
    }
}

impl core::error::Error for ReadError {}

/// Take a [`LayoutSnapshot`] of `node`.
///
/// Never mutates the host. Hidden elements yield a snapshot flagged
/// [`is_hidden`](LayoutSnapshot::is_hidden) rather than an error; missing or
/// unparsable lengths read as `0`.
pub fn read<H: LayoutHost + ?Sized>(host: &H, node: H::Node) -> Result<LayoutSnapshot, ReadError> {
    match host.kind(node) {
        None => return Err(ReadError::StaleNode),
        Some(NodeKind::Text) => return Err(ReadError::NotAnElement),
        Some(NodeKind::Element) => {}
    }

    let keyword = |property| {
        host.style(node, property)
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default()
    };
    let display_none = keyword(StyleProperty::Display) == "none";
    let visibility_hidden = keyword(StyleProperty::Visibility) == "hidden";

    let px = |property| host.style(node, property).map_or(0.0, |v| parse_px(&v));
    let sides = |of: fn(Edge) -> StyleProperty| Insets {
        x0: px(of(Edge::Left)),
        y0: px(of(Edge::Top)),
        x1: px(of(Edge::Right)),
        y1: px(of(Edge::Bottom)),
    };

    let border_box = match host.border_box(node) {
        Some(b) => b,
        None if display_none || visibility_hidden => Rect::ZERO,
        None => return Err(ReadError::MissingBorderBox),
    };

    Ok(LayoutSnapshot {
        border_box,
        margin: sides(StyleProperty::margin),
        padding: sides(StyleProperty::padding),
        font_size_px: px(StyleProperty::FontSize),
        display_none,
        visibility_hidden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;
    use alloc::vec;
    use alloc::vec::Vec;

    /// One node of a [`Sheet`].
    struct Entry {
        kind: NodeKind,
        styles: &'static [(StyleProperty, &'static str)],
        border_box: Option<Rect>,
    }

    /// Flat host: node ids index `nodes`; anything past the end is stale.
    struct Sheet {
        nodes: Vec<Entry>,
    }

    impl Sheet {
        fn element(styles: &'static [(StyleProperty, &'static str)], border_box: Option<Rect>) -> Self {
            Self {
                nodes: vec![Entry {
                    kind: NodeKind::Element,
                    styles,
                    border_box,
                }],
            }
        }
    }

    impl LayoutHost for Sheet {
        type Node = usize;
        fn root(&self) -> Option<usize> {
            None
        }
        fn kind(&self, node: usize) -> Option<NodeKind> {
            self.nodes.get(node).map(|e| e.kind)
        }
        fn first_child(&self, _: usize) -> Option<usize> {
            None
        }
        fn next_sibling(&self, _: usize) -> Option<usize> {
            None
        }
        fn is_excluded(&self, _: usize) -> bool {
            false
        }
        fn style(&self, node: usize, property: StyleProperty) -> Option<Cow<'_, str>> {
            self.nodes
                .get(node)?
                .styles
                .iter()
                .find(|(p, _)| *p == property)
                .map(|(_, v)| Cow::Borrowed(*v))
        }
        fn border_box(&self, node: usize) -> Option<Rect> {
            self.nodes.get(node)?.border_box
        }
    }

    const BOX: Rect = Rect::new(10.0, 20.0, 110.0, 70.0);

    #[test]
    fn resolves_box_model_values() {
        let host = Sheet::element(
            &[
                (StyleProperty::MarginTop, "10px"),
                (StyleProperty::MarginLeft, " 2.5px "),
                (StyleProperty::MarginRight, "auto"),
                (StyleProperty::PaddingBottom, "4"),
                (StyleProperty::FontSize, "16px"),
            ],
            Some(BOX),
        );
        let s = read(&host, 0).unwrap();
        assert_eq!(s.border_box, BOX);
        assert_eq!(s.margin, Insets { x0: 2.5, y0: 10.0, x1: 0.0, y1: 0.0 });
        assert_eq!(s.padding_on(Edge::Bottom), 4.0, "unitless lengths are pixels");
        assert_eq!(s.padding_on(Edge::Top), 0.0, "missing values read as zero");
        assert_eq!(s.font_size_px, 16.0);
        assert!(!s.is_hidden());
        assert_eq!((s.width(), s.height()), (100.0, 50.0));
    }

    #[test]
    fn visibility_keywords_ignore_case_and_whitespace() {
        let none = Sheet::element(&[(StyleProperty::Display, "NONE")], Some(BOX));
        let s = read(&none, 0).unwrap();
        assert!(s.display_none && !s.visibility_hidden);

        let hidden = Sheet::element(&[(StyleProperty::Visibility, " Hidden ")], Some(BOX));
        let s = read(&hidden, 0).unwrap();
        assert!(s.visibility_hidden && !s.display_none);
        assert!(s.is_hidden());

        let shown = Sheet::element(
            &[
                (StyleProperty::Display, "block"),
                (StyleProperty::Visibility, "visible"),
            ],
            Some(BOX),
        );
        assert!(!read(&shown, 0).unwrap().is_hidden());
    }

    #[test]
    fn hidden_element_without_box_reads_as_zero() {
        let host = Sheet::element(&[(StyleProperty::Display, "none")], None);
        let s = read(&host, 0).unwrap();
        assert_eq!(s.border_box, Rect::ZERO);
        assert!(s.display_none);
    }

    #[test]
    fn unreadable_nodes_are_errors() {
        let visible_without_box = Sheet::element(&[], None);
        assert_eq!(
            read(&visible_without_box, 0),
            Err(ReadError::MissingBorderBox)
        );
        assert_eq!(
            read(&visible_without_box, 5),
            Err(ReadError::StaleNode),
            "unknown ids are stale"
        );

        let text = Sheet {
            nodes: vec![Entry {
                kind: NodeKind::Text,
                styles: &[],
                border_box: Some(BOX),
            }],
        };
        assert_eq!(read(&text, 0), Err(ReadError::NotAnElement));
    }
}
