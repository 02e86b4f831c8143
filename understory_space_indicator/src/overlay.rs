// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay registry: the only owner of inserted markers.
//!
//! Every marker the engine inserts is tracked by exactly one
//! [`OverlayHandle`] inside an [`OverlayRegistry`]. [`OverlayRegistry::clear_all`]
//! removes all of them; nothing else removes markers.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::host::OverlayHost;
use crate::palette::{Palette, Rgba};
use crate::types::{ColorToken, Edge, IndicatorDescriptor, IndicatorKind};

/// Stacking order of margin, padding, gap and dimension markers.
pub const SPACE_Z_INDEX: i32 = 9999;
/// Stacking order of font-size labels, above the space markers.
pub const FONT_SIZE_Z_INDEX: i32 = 10000;

/// Visual family of a marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerClass {
    /// Margin, padding and gap bands.
    Space,
    /// Font-size labels.
    FontSize,
    /// Dimension boxes.
    Dimension,
}

impl MarkerClass {
    /// Class name hosts can attach to the marker node.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Space => "space-indicator",
            Self::FontSize => "font-size-indicator",
            Self::Dimension => "dimension-indicator",
        }
    }

    /// Family of markers of `kind`.
    pub const fn for_kind(kind: IndicatorKind) -> Self {
        match kind {
            IndicatorKind::Margin | IndicatorKind::Padding | IndicatorKind::Gap => Self::Space,
            IndicatorKind::FontSize => Self::FontSize,
            IndicatorKind::Dimension => Self::Dimension,
        }
    }

    /// Stacking order of this family.
    pub const fn z_index(self) -> i32 {
        match self {
            Self::Space | Self::Dimension => SPACE_Z_INDEX,
            Self::FontSize => FONT_SIZE_Z_INDEX,
        }
    }
}

/// Everything a host needs to draw one marker.
///
/// Markers are absolutely positioned, excluded from layout, and never receive
/// pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSpec<'a> {
    /// Visual family.
    pub class: MarkerClass,
    /// Absolute rectangle.
    pub rect: Rect,
    /// Text shown on the marker.
    pub label: &'a str,
    /// Fill color.
    pub background: Rgba,
    /// Optional one-pixel line on one side, with its color.
    pub border: Option<(Edge, Rgba)>,
    /// Stacking order.
    pub z_index: i32,
}

impl<'a> MarkerSpec<'a> {
    /// Resolve a descriptor against a palette.
    pub fn from_descriptor<K>(descriptor: &'a IndicatorDescriptor<K>, palette: &Palette) -> Self {
        let class = MarkerClass::for_kind(descriptor.kind);
        Self {
            class,
            rect: descriptor.position,
            label: &descriptor.label,
            background: palette.color(descriptor.color),
            border: descriptor
                .inner_border
                .map(|edge| (edge, palette.color(ColorToken::PaddingBorder))),
            z_index: class.z_index(),
        }
    }
}

/// Why a marker could not be inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterializeError {
    /// The host has no document to insert into.
    NoDocument,
    /// The host refused the marker.
    Rejected,
}

impl fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no document to insert the marker into"),
            Self::Rejected => f.write_str("host rejected the marker"),
        }
    }
}

impl core::error::Error for MaterializeError {}

/// A live marker, owned by an [`OverlayRegistry`].
#[derive(Debug)]
pub struct OverlayHandle<M> {
    marker: M,
    kind: IndicatorKind,
    rect: Rect,
    label: String,
}

impl<M> OverlayHandle<M> {
    /// Host-side marker reference.
    pub fn marker(&self) -> &M {
        &self.marker
    }

    /// What the marker shows.
    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Where the marker is drawn.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Text on the marker.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The set of markers currently inserted into a host.
#[derive(Debug)]
pub struct OverlayRegistry<M> {
    live: Vec<OverlayHandle<M>>,
}

impl<M> Default for OverlayRegistry<M> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<M> OverlayRegistry<M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every live marker from `host`. Idempotent.
    pub fn clear_all<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        if self.live.is_empty() {
            return;
        }
        tracing::trace!(count = self.live.len(), "clearing overlay markers");
        for handle in self.live.drain(..) {
            host.remove_marker(handle.marker);
        }
    }

    /// Insert a marker for `descriptor` and start tracking it.
    pub fn materialize<H, K>(
        &mut self,
        host: &mut H,
        descriptor: &IndicatorDescriptor<K>,
        palette: &Palette,
    ) -> Result<&OverlayHandle<M>, MaterializeError>
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        let spec = MarkerSpec::from_descriptor(descriptor, palette);
        let marker = host.insert_marker(&spec)?;
        tracing::trace!(kind = ?descriptor.kind, label = %descriptor.label, "marker inserted");
        self.live.push(OverlayHandle {
            marker,
            kind: descriptor.kind,
            rect: descriptor.position,
            label: descriptor.label.clone(),
        });
        Ok(&self.live[self.live.len() - 1])
    }

    /// Number of live markers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no markers are live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate live markers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayHandle<M>> + '_ {
        self.live.iter()
    }
}
