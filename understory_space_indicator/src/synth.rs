// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-model arithmetic: snapshots in, indicator descriptors out.

use alloc::format;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::snapshot::LayoutSnapshot;
use crate::style::round_px;
use crate::toggles::ToggleState;
use crate::types::{Axis, ColorToken, Edge, IndicatorDescriptor, IndicatorKind};

/// Descriptors produced for a single element.
pub type Descriptors<K> = SmallVec<[IndicatorDescriptor<K>; 4]>;

/// Everything the synthesizer needs to know about one element.
#[derive(Clone, Copy, Debug)]
pub struct ElementInput<'a, K> {
    /// The element being described.
    pub node: K,
    /// Its snapshot.
    pub snapshot: &'a LayoutSnapshot,
    /// Snapshot of its immediately following element sibling, if measured.
    pub next_sibling: Option<&'a LayoutSnapshot>,
    /// Whether one of its immediate children is a text node.
    pub owns_direct_text: bool,
}

/// Compute all indicators for one element under `toggles`.
///
/// Pure: the same input always yields the same descriptors, in the order
/// margins (top, right, bottom, left), gaps (vertical, horizontal), paddings
/// (top, right, bottom, left), font size, dimension. Hidden elements yield
/// nothing.
///
/// ```rust
/// use kurbo::{Insets, Rect};
/// use understory_space_indicator::{
///     ElementInput, Edge, IndicatorKind, LayoutSnapshot, ToggleState, synthesize,
/// };
///
/// let snapshot = LayoutSnapshot {
///     margin: Insets { y0: 10.0, ..Insets::ZERO },
///     ..LayoutSnapshot::from_box(Rect::new(0.0, 20.0, 100.0, 60.0))
/// };
/// let out = synthesize(
///     ElementInput { node: 1_u32, snapshot: &snapshot, next_sibling: None, owns_direct_text: false },
///     ToggleState::NONE.with_spacing(true),
/// );
/// assert_eq!(out.len(), 1);
/// assert_eq!(out[0].kind, IndicatorKind::Margin);
/// assert_eq!(out[0].edge, Some(Edge::Top));
/// assert_eq!(out[0].label, "10px");
/// assert_eq!(out[0].position, Rect::new(0.0, 10.0, 100.0, 20.0));
/// ```
pub fn synthesize<K: Copy>(input: ElementInput<'_, K>, toggles: ToggleState) -> Descriptors<K> {
    let mut out = Descriptors::new();
    if input.snapshot.is_hidden() {
        return out;
    }
    if toggles.spacing {
        margins(&input, &mut out);
        gaps(&input, &mut out);
    }
    if toggles.padding {
        paddings(&input, &mut out);
    }
    if toggles.font_size && input.owns_direct_text {
        out.push(IndicatorDescriptor {
            node: input.node,
            kind: IndicatorKind::FontSize,
            edge: None,
            axis: None,
            position: input.snapshot.border_box,
            label: format!("{}px", round_px(input.snapshot.font_size_px)),
            color: ColorToken::FontSize,
            inner_border: None,
        });
    }
    if toggles.dimensions {
        let s = input.snapshot;
        out.push(IndicatorDescriptor {
            node: input.node,
            kind: IndicatorKind::Dimension,
            edge: None,
            axis: None,
            position: s.border_box,
            label: format!("{}px x {}px", round_px(s.width()), round_px(s.height())),
            color: ColorToken::Dimension,
            inner_border: None,
        });
    }
    out
}

fn margins<K: Copy>(input: &ElementInput<'_, K>, out: &mut Descriptors<K>) {
    let s = input.snapshot;
    for edge in Edge::ALL {
        let m = round_px(s.margin_on(edge));
        if m <= 0 {
            continue;
        }
        let w = m as f64;
        let position = match edge {
            Edge::Top => Rect::new(s.left(), s.top() - w, s.right(), s.top()),
            Edge::Right => Rect::new(s.right(), s.top(), s.right() + w, s.bottom()),
            Edge::Bottom => Rect::new(s.left(), s.bottom(), s.right(), s.bottom() + w),
            Edge::Left => Rect::new(s.left() - w, s.top(), s.left(), s.bottom()),
        };
        out.push(IndicatorDescriptor {
            node: input.node,
            kind: IndicatorKind::Margin,
            edge: Some(edge),
            axis: None,
            position,
            label: format!("{m}px"),
            color: ColorToken::margin(edge),
            inner_border: None,
        });
    }
}

fn gaps<K: Copy>(input: &ElementInput<'_, K>, out: &mut Descriptors<K>) {
    let Some(next) = input.next_sibling.filter(|n| !n.display_none) else {
        return;
    };
    let s = input.snapshot;

    let mut push = |axis, gap: i64, position| {
        out.push(IndicatorDescriptor {
            node: input.node,
            kind: IndicatorKind::Gap,
            edge: None,
            axis: Some(axis),
            position,
            label: format!("{gap}px"),
            color: ColorToken::Gap,
            inner_border: None,
        });
    };

    if next.top() > s.bottom() {
        let gap = round_px(next.top() - s.bottom());
        if gap > 0 {
            let position = Rect::new(s.left(), s.bottom(), s.right(), s.bottom() + gap as f64);
            push(Axis::Vertical, gap, position);
        }
    }
    if next.left() > s.right() {
        let gap = round_px(next.left() - s.right());
        if gap > 0 {
            let position = Rect::new(s.right(), s.top(), s.right() + gap as f64, s.bottom());
            push(Axis::Horizontal, gap, position);
        }
    }
}

fn paddings<K: Copy>(input: &ElementInput<'_, K>, out: &mut Descriptors<K>) {
    let s = input.snapshot;
    for edge in Edge::ALL {
        let p = round_px(s.padding_on(edge));
        if p <= 0 {
            continue;
        }
        let w = p as f64;
        let position = match edge {
            Edge::Top => Rect::new(s.left(), s.top(), s.right(), s.top() + w),
            Edge::Right => Rect::new(s.right() - w, s.top(), s.right(), s.bottom()),
            Edge::Bottom => Rect::new(s.left(), s.bottom() - w, s.right(), s.bottom()),
            Edge::Left => Rect::new(s.left(), s.top(), s.left() + w, s.bottom()),
        };
        out.push(IndicatorDescriptor {
            node: input.node,
            kind: IndicatorKind::Padding,
            edge: Some(edge),
            axis: None,
            position,
            label: format!("{p}px"),
            color: ColorToken::Padding,
            // The band's content-facing side is the one opposite its edge.
            inner_border: Some(edge.opposite()),
        });
    }
}
