// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_layout_tree --heading-base-level=0

//! Understory Layout Tree: an in-memory document of laid-out elements.
//!
//! This crate models the part of a rendered page that inspection tools read:
//!
//! - A hierarchy of [`Element`] and text nodes in document order.
//! - Per-element resolved [`Style`] declarations, stored as the strings a
//!   computed-style query would return.
//! - Per-element absolute border boxes as [`kurbo::Rect`].
//! - [`NodeFlags`] marking inert subtrees (an inspector's own controls) and
//!   overlay markers inserted by an inspector.
//!
//! ## Not a layout engine
//!
//! Nothing here measures or arranges content. Upstream code (a browser engine,
//! a test fixture, a recorded page) assigns border boxes; this crate stores
//! them and answers structural queries.
//!
//! ## API overview
//!
//! - [`Document`]: container managing nodes, the root, and tree queries.
//! - [`Element`]: tag, classes, style, and border box.
//! - [`NodeData`]: closed `Element | Text` payload.
//! - [`NodeId`]: generational handle of a node.
//!
//! Key operations:
//! - [`Document::insert_element`] / [`Document::insert_text`] → [`NodeId`]
//! - [`Document::remove`] removes a node and its subtree.
//! - [`Document::first_child`], [`Document::next_sibling`],
//!   [`Document::parent_of`], [`Document::next_depth_first`] for traversal.
//! - [`Document::is_excluded`] reports inert or overlay subtrees.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod style;
mod types;

pub use document::Document;
pub use style::Style;
pub use types::{Element, NodeData, NodeFlags, NodeId};
