// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Understory crates.
//!
//! Each adapter is gated behind a feature flag so the engine itself only
//! depends on the [`LayoutHost`](crate::LayoutHost) and
//! [`OverlayHost`](crate::OverlayHost) traits.
//!
//! ## Available Adapters
//!
//! - [`layout_tree`] (`layout_tree_adapter` feature): implements both host traits for
//!   [`understory_layout_tree::Document`], inserting markers as overlay elements at the
//!   end of the document root.

#[cfg(feature = "layout_tree_adapter")]
pub mod layout_tree;
