// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space indicator walkthrough: toggle each category over a small page.
//!
//! This example builds a laid-out `understory_layout_tree::Document` by hand,
//! attaches a `SpaceIndicator`, and flips every category on and off the way a
//! control panel would, printing the markers after each refresh.
//!
//! Run:
//! - `cargo run -p understory_demos --example space_indicator_walkthrough`
//! - `RUST_LOG=understory_space_indicator=trace cargo run -p understory_demos --example space_indicator_walkthrough`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_layout_tree::{Document, Element, NodeFlags, NodeId};
use understory_space_indicator::{RefreshReport, SpaceIndicator};

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut doc = Document::new();
    let body = doc.insert_element(
        None,
        Element::new("body").with_box(Rect::new(0.0, 0.0, 800.0, 600.0)),
    );

    // A header row with two side-by-side buttons.
    let header = doc.insert_element(
        Some(body),
        Element::new("header")
            .with_box(Rect::new(16.0, 16.0, 784.0, 80.0))
            .with_style("margin", "16px")
            .with_style("padding", "12px 24px"),
    );
    let save = doc.insert_element(
        Some(header),
        Element::new("button")
            .with_box(Rect::new(40.0, 28.0, 140.0, 68.0))
            .with_style("font-size", "14px"),
    );
    doc.insert_text(save, "Save");
    let open = doc.insert_element(
        Some(header),
        Element::new("button")
            .with_box(Rect::new(152.0, 28.0, 252.0, 68.0))
            .with_style("font-size", "14px"),
    );
    doc.insert_text(open, "Open");

    // A paragraph below the header.
    let para = doc.insert_element(
        Some(body),
        Element::new("p")
            .with_box(Rect::new(16.0, 112.0, 784.0, 160.0))
            .with_style("font-size", "17.6px")
            .with_style("margin-bottom", "1em"),
    );
    doc.insert_text(para, "Body copy");

    // The control panel itself is inert and never annotated.
    let panel = doc.insert_element_with_flags(
        Some(body),
        Element::new("div")
            .with_box(Rect::new(600.0, 520.0, 790.0, 590.0))
            .with_style("padding", "8px"),
        NodeFlags::INERT,
    );
    doc.insert_text(panel, "Space Indicator");

    let mut engine = SpaceIndicator::new();
    engine.attach(&mut doc);

    let report = engine.toggle_spacing(&mut doc);
    print_markers("spacing", &engine, &report);

    let report = engine.toggle_padding(&mut doc);
    print_markers("spacing + padding", &engine, &report);

    // Upstream layout moved the paragraph down; markers follow on the next refresh.
    doc.set_border_box(para, Rect::new(16.0, 140.0, 784.0, 188.0));
    doc.set_style(para, "margin-top", "28px");
    let report = engine.refresh(&mut doc);
    print_markers("after relayout", &engine, &report);

    engine.toggle_spacing(&mut doc);
    let report = engine.toggle_padding(&mut doc);
    print_markers("nothing", &engine, &report);

    if let Some(report) = engine.update(&mut doc, |t| {
        t.font_size = true;
        t.dimensions = true;
    }) {
        print_markers("font size + dimensions", &engine, &report);
    }

    engine.detach(&mut doc);
    tracing::info!(overlays = doc.overlays().count(), "detached");
}

fn print_markers(title: &str, engine: &SpaceIndicator<NodeId>, report: &RefreshReport) {
    println!(
        "\n== {title}: {} markers from {} elements ==",
        report.materialized, report.visited
    );
    for handle in engine.registry().iter() {
        let r = handle.rect();
        println!(
            "  {:<10} {:>14}  at ({}, {}) {}x{}",
            format!("{:?}", handle.kind()),
            handle.label(),
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
    }
}
