// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator descriptors and their vocabulary.

use alloc::string::String;

use kurbo::Rect;

/// One side of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top side.
    Top,
    /// Right side.
    Right,
    /// Bottom side.
    Bottom,
    /// Left side.
    Left,
}

impl Edge {
    /// All edges in CSS order (top, right, bottom, left).
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The opposite edge.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// CSS side name, as used in `margin-{side}`.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Axis along which a gap is measured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Space between a box's bottom and its sibling's top.
    Vertical,
    /// Space between a box's right and its sibling's left.
    Horizontal,
}

/// What an indicator measures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    /// A margin band outside the border box.
    Margin,
    /// A padding band inside the border box.
    Padding,
    /// Empty space up to the next sibling.
    Gap,
    /// Resolved font size of an element that owns text.
    FontSize,
    /// Border-box width and height.
    Dimension,
}

/// Abstract color identity of an indicator; mapped to a concrete color by a
/// [`Palette`](crate::Palette).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Top margin band.
    MarginTop,
    /// Right margin band.
    MarginRight,
    /// Bottom margin band.
    MarginBottom,
    /// Left margin band.
    MarginLeft,
    /// Padding band fill.
    Padding,
    /// Line separating a padding band from the content box.
    PaddingBorder,
    /// Gap band.
    Gap,
    /// Font-size label.
    FontSize,
    /// Dimension box.
    Dimension,
}

impl ColorToken {
    /// The color identity of a margin band on `edge`.
    pub const fn margin(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::MarginTop,
            Edge::Right => Self::MarginRight,
            Edge::Bottom => Self::MarginBottom,
            Edge::Left => Self::MarginLeft,
        }
    }
}

/// An annotation to be drawn over the document.
///
/// Produced by [`synthesize`](crate::synthesize) and consumed once by
/// [`OverlayRegistry::materialize`](crate::OverlayRegistry::materialize).
/// `K` is the host's node identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorDescriptor<K> {
    /// Element the indicator describes.
    pub node: K,
    /// What is measured.
    pub kind: IndicatorKind,
    /// Box side, for margin and padding bands.
    pub edge: Option<Edge>,
    /// Measurement axis, for gaps.
    pub axis: Option<Axis>,
    /// Absolute rectangle the marker occupies.
    pub position: Rect,
    /// Text shown on the marker.
    pub label: String,
    /// Fill color identity.
    pub color: ColorToken,
    /// Side of the marker that gets a separating border, for padding bands.
    pub inner_border: Option<Edge>,
}
