// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: toggle state plus the full refresh pass.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::host::{LayoutHost, NodeKind, OverlayHost};
use crate::overlay::OverlayRegistry;
use crate::palette::Palette;
use crate::snapshot::{LayoutSnapshot, read};
use crate::synth::{ElementInput, synthesize};
use crate::toggles::ToggleState;
use crate::types::IndicatorDescriptor;

/// Counts describing one refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Elements measured.
    pub visited: usize,
    /// Measured elements skipped as hidden.
    pub hidden: usize,
    /// Elements that could not be measured.
    pub failed_reads: usize,
    /// Descriptors synthesized.
    pub descriptors: usize,
    /// Markers inserted; equals the registry size after the refresh.
    pub materialized: usize,
    /// Descriptors whose marker the host refused.
    pub failed_markers: usize,
}

/// A measured element awaiting synthesis.
#[derive(Clone, Copy, Debug)]
struct Measured<N> {
    node: N,
    snapshot: LayoutSnapshot,
    owns_direct_text: bool,
}

/// Box-model overlay engine for one document.
///
/// Holds the [`ToggleState`], the [`Palette`] and the [`OverlayRegistry`].
/// Every state change goes through a method that also runs exactly one full
/// [`refresh`](Self::refresh): clear every marker, measure every visible
/// element, synthesize, materialize. There is no incremental path.
///
/// Refreshing needs `&mut self` and `&mut` access to the host, so a refresh
/// always runs to completion before the next one starts. Several toggle
/// changes can be coalesced into a single trailing refresh with
/// [`update`](Self::update).
///
/// `M` is the host's marker type.
#[derive(Debug)]
pub struct SpaceIndicator<M> {
    toggles: ToggleState,
    palette: Palette,
    registry: OverlayRegistry<M>,
    last_report: RefreshReport,
}

impl<M> Default for SpaceIndicator<M> {
    fn default() -> Self {
        Self::with_palette(Palette::default())
    }
}

impl<M> SpaceIndicator<M> {
    /// Create an engine with every category off and the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with every category off and a custom palette.
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            toggles: ToggleState::NONE,
            palette,
            registry: OverlayRegistry::new(),
            last_report: RefreshReport::default(),
        }
    }

    /// Builder: start from `toggles` instead of everything off.
    ///
    /// Nothing is drawn until the next refresh (usually [`attach`](Self::attach)).
    pub fn with_toggles(mut self, toggles: ToggleState) -> Self {
        self.toggles = toggles;
        self
    }

    /// Current toggle state.
    pub fn toggles(&self) -> ToggleState {
        self.toggles
    }

    /// Current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Live markers.
    pub fn registry(&self) -> &OverlayRegistry<M> {
        &self.registry
    }

    /// Report of the most recent refresh.
    pub fn last_report(&self) -> RefreshReport {
        self.last_report
    }
}

impl<M> SpaceIndicator<M> {
    /// Run the initial refresh against `host`.
    pub fn attach<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.refresh(host)
    }

    /// Remove every marker, leaving the document as it was before [`attach`](Self::attach).
    pub fn detach<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.registry.clear_all(host);
        self.last_report = RefreshReport::default();
    }

    /// Replace the palette and redraw.
    pub fn set_palette<H>(&mut self, host: &mut H, palette: Palette) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.palette = palette;
        self.refresh(host)
    }

    /// Flip font-size labels and refresh.
    pub fn toggle_font_size<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.toggles.toggle_font_size();
        self.refresh(host)
    }

    /// Flip margin and gap bands and refresh.
    pub fn toggle_spacing<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.toggles.toggle_spacing();
        self.refresh(host)
    }

    /// Flip padding bands and refresh.
    pub fn toggle_padding<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.toggles.toggle_padding();
        self.refresh(host)
    }

    /// Flip dimension boxes and refresh.
    pub fn toggle_dimensions<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.toggles.toggle_dimensions();
        self.refresh(host)
    }

    /// Set font-size labels on or off; refreshes only on a change.
    pub fn set_font_size<H>(&mut self, host: &mut H, on: bool) -> Option<RefreshReport>
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.update(host, |t| t.font_size = on)
    }

    /// Set margin and gap bands on or off; refreshes only on a change.
    pub fn set_spacing<H>(&mut self, host: &mut H, on: bool) -> Option<RefreshReport>
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.update(host, |t| t.spacing = on)
    }

    /// Set padding bands on or off; refreshes only on a change.
    pub fn set_padding<H>(&mut self, host: &mut H, on: bool) -> Option<RefreshReport>
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.update(host, |t| t.padding = on)
    }

    /// Set dimension boxes on or off; refreshes only on a change.
    pub fn set_dimensions<H>(&mut self, host: &mut H, on: bool) -> Option<RefreshReport>
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.update(host, |t| t.dimensions = on)
    }

    /// Apply any number of toggle changes, then refresh once if anything changed.
    ///
    /// Returns `None` when the state is unchanged.
    ///
    /// ```rust
    /// use kurbo::Rect;
    /// use understory_layout_tree::{Document, Element};
    /// use understory_space_indicator::SpaceIndicator;
    ///
    /// let mut doc = Document::new();
    /// let body = doc.insert_element(None, Element::new("body"));
    /// doc.insert_element(
    ///     Some(body),
    ///     Element::new("div")
    ///         .with_box(Rect::new(0.0, 10.0, 100.0, 40.0))
    ///         .with_style("margin", "10px 0 0 0"),
    /// );
    ///
    /// let mut engine = SpaceIndicator::new();
    /// engine.attach(&mut doc);
    /// let report = engine
    ///     .update(&mut doc, |t| {
    ///         t.spacing = true;
    ///         t.dimensions = true;
    ///     })
    ///     .unwrap();
    /// assert_eq!(report.materialized, 2);
    /// assert!(engine.update(&mut doc, |t| t.spacing = true).is_none());
    /// ```
    pub fn update<H, F>(&mut self, host: &mut H, f: F) -> Option<RefreshReport>
    where
        H: OverlayHost<Marker = M> + ?Sized,
        F: FnOnce(&mut ToggleState),
    {
        let before = self.toggles;
        f(&mut self.toggles);
        (self.toggles != before).then(|| self.refresh(host))
    }

    /// Clear every marker and re-annotate the whole document.
    ///
    /// All snapshots are taken before the first marker is inserted, so markers
    /// from this pass cannot disturb measurements of later elements. A node
    /// that cannot be measured, or a marker the host refuses, is logged and
    /// skipped without affecting anything else.
    pub fn refresh<H>(&mut self, host: &mut H) -> RefreshReport
    where
        H: OverlayHost<Marker = M> + ?Sized,
    {
        self.registry.clear_all(host);

        let mut report = RefreshReport::default();
        if !self.toggles.any() {
            tracing::debug!("all indicator categories off; nothing to draw");
            self.last_report = report;
            return report;
        }

        let measured = measure_all(&*host, &mut report);
        let descriptors = synthesize_all(&*host, &measured, self.toggles);
        report.descriptors = descriptors.len();

        for descriptor in &descriptors {
            match self.registry.materialize(host, descriptor, &self.palette) {
                Ok(_) => report.materialized += 1,
                Err(err) => {
                    tracing::warn!(
                        node = ?descriptor.node,
                        kind = ?descriptor.kind,
                        %err,
                        "skipping indicator marker"
                    );
                    report.failed_markers += 1;
                }
            }
        }

        tracing::debug!(
            visited = report.visited,
            hidden = report.hidden,
            failed_reads = report.failed_reads,
            descriptors = report.descriptors,
            materialized = report.materialized,
            "space indicator refresh"
        );
        self.last_report = report;
        report
    }
}

/// Walk the document under the root in document order and snapshot every
/// element that is not excluded.
///
/// Excluded nodes and `display: none` elements are skipped with their whole
/// subtree. `visibility: hidden` elements are measured but never annotated,
/// and their descendants are still visited, since those may be visible again.
fn measure_all<H>(host: &H, report: &mut RefreshReport) -> Vec<Measured<H::Node>>
where
    H: LayoutHost + ?Sized,
{
    let mut out = Vec::new();
    let Some(root) = host.root() else {
        return out;
    };

    // Each entry is the next node to visit at some depth.
    let mut stack: Vec<H::Node> = host.first_child(root).into_iter().collect();
    while let Some(node) = stack.pop() {
        if let Some(sibling) = host.next_sibling(node) {
            stack.push(sibling);
        }
        if host.kind(node) != Some(NodeKind::Element) || host.is_excluded(node) {
            continue;
        }

        report.visited += 1;
        let descend = match read(host, node) {
            Ok(snapshot) if snapshot.display_none => {
                report.hidden += 1;
                false
            }
            Ok(snapshot) => {
                // A `visibility: hidden` box still occupies layout, so it stays
                // measured as a gap partner; synthesis draws nothing for it.
                if snapshot.visibility_hidden {
                    report.hidden += 1;
                }
                out.push(Measured {
                    node,
                    snapshot,
                    owns_direct_text: host.owns_direct_text(node),
                });
                true
            }
            Err(err) => {
                tracing::warn!(?node, %err, "skipping element");
                report.failed_reads += 1;
                true
            }
        };
        if descend && let Some(child) = host.first_child(node) {
            stack.push(child);
        }
    }
    out
}

/// Synthesize descriptors for every measured element, in document order.
fn synthesize_all<H>(
    host: &H,
    measured: &[Measured<H::Node>],
    toggles: ToggleState,
) -> Vec<IndicatorDescriptor<H::Node>>
where
    H: LayoutHost + ?Sized,
{
    let index: HashMap<H::Node, usize> = measured
        .iter()
        .enumerate()
        .map(|(i, m)| (m.node, i))
        .collect();

    let mut out = Vec::new();
    for m in measured {
        // Only a measured (laid out, non-excluded) sibling can produce a gap.
        let next_sibling = if toggles.spacing {
            host.next_element_sibling(m.node)
                .and_then(|s| index.get(&s))
                .map(|&i| &measured[i].snapshot)
        } else {
            None
        };
        out.extend(synthesize(
            ElementInput {
                node: m.node,
                snapshot: &m.snapshot,
                next_sibling,
                owns_direct_text: m.owns_direct_text,
            },
            toggles,
        ));
    }
    out
}
