// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_space_indicator --heading-base-level=0

//! Understory Space Indicator: box-model overlays for layout debugging.
//!
//! This crate draws the normally invisible parts of a layout over a rendered
//! document: margins, padding, gaps between siblings, font sizes and element
//! dimensions. It reads layout and never computes it; the only change it makes
//! to a document is inserting overlay markers that take no part in layout.
//!
//! The engine is split into four pieces:
//!
//! - **Snapshot reader** ([`read`]): resolves one element's box-model values
//!   and absolute border box into a [`LayoutSnapshot`].
//! - **Synthesizer** ([`synthesize`]): a pure function from snapshots to
//!   [`IndicatorDescriptor`]s, gated by [`ToggleState`].
//! - **Overlay registry** ([`OverlayRegistry`]): the sole owner of inserted
//!   markers, with [`clear_all`](OverlayRegistry::clear_all) and
//!   [`materialize`](OverlayRegistry::materialize).
//! - **Controller** ([`SpaceIndicator`]): holds the toggles and runs a full
//!   refresh after every change.
//!
//! The document is reached through two traits: [`LayoutHost`] for reading and
//! [`OverlayHost`] for inserting and removing markers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_layout_tree::{Document, Element};
//! use understory_space_indicator::{IndicatorKind, SpaceIndicator};
//!
//! let mut doc = Document::new();
//! let body = doc.insert_element(None, Element::new("body"));
//! doc.insert_element(
//!     Some(body),
//!     Element::new("div").with_box(Rect::new(0.0, 60.0, 300.0, 100.0)),
//! );
//! doc.insert_element(
//!     Some(body),
//!     Element::new("div").with_box(Rect::new(0.0, 140.0, 300.0, 180.0)),
//! );
//!
//! let mut engine = SpaceIndicator::new();
//! engine.attach(&mut doc);
//! engine.toggle_spacing(&mut doc);
//!
//! // One vertical gap between the two boxes.
//! let markers: Vec<_> = engine.registry().iter().collect();
//! assert_eq!(markers.len(), 1);
//! assert_eq!(markers[0].kind(), IndicatorKind::Gap);
//! assert_eq!(markers[0].label(), "40px");
//! assert_eq!(markers[0].rect(), Rect::new(0.0, 100.0, 300.0, 140.0));
//!
//! // Turning spacing off again removes it.
//! engine.toggle_spacing(&mut doc);
//! assert!(engine.registry().is_empty());
//! ```
//!
//! ## Exclusion
//!
//! Nodes for which [`LayoutHost::is_excluded`] is true are skipped with their
//! whole subtree. Hosts must report their own control surface and every
//! inserted marker as excluded, so markers are never measured or annotated.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `layout_tree_adapter` (default): implements the host traits for
//!   `understory_layout_tree::Document`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "layout_tree_adapter")]
pub mod adapters;

mod engine;
mod host;
mod overlay;
mod palette;
mod snapshot;
mod style;
mod synth;
mod toggles;
mod types;

pub use engine::{RefreshReport, SpaceIndicator};
pub use host::{LayoutHost, NodeKind, OverlayHost};
pub use overlay::{
    FONT_SIZE_Z_INDEX, MarkerClass, MarkerSpec, MaterializeError, OverlayHandle, OverlayRegistry,
    SPACE_Z_INDEX,
};
pub use palette::{Palette, Rgba};
pub use snapshot::{LayoutSnapshot, ReadError, read};
pub use style::{StyleProperty, parse_px, round_px};
pub use synth::{Descriptors, ElementInput, synthesize};
pub use toggles::ToggleState;
pub use types::{Axis, ColorToken, Edge, IndicatorDescriptor, IndicatorKind};
