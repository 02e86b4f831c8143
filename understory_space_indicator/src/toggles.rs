// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which indicator categories are active.

/// Four independent switches, one per indicator category.
///
/// Any combination is valid. Mutating this value does not refresh anything on
/// its own; [`SpaceIndicator`](crate::SpaceIndicator) pairs each mutation with
/// a refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToggleState {
    /// Font-size labels on elements that own text.
    pub font_size: bool,
    /// Margin bands and sibling gaps.
    pub spacing: bool,
    /// Padding bands.
    pub padding: bool,
    /// Border-box dimensions.
    pub dimensions: bool,
}

impl ToggleState {
    /// Everything off.
    pub const NONE: Self = Self {
        font_size: false,
        spacing: false,
        padding: false,
        dimensions: false,
    };

    /// Everything on.
    pub const ALL: Self = Self {
        font_size: true,
        spacing: true,
        padding: true,
        dimensions: true,
    };

    /// Builder: set `font_size`.
    pub const fn with_font_size(mut self, on: bool) -> Self {
        self.font_size = on;
        self
    }

    /// Builder: set `spacing`.
    pub const fn with_spacing(mut self, on: bool) -> Self {
        self.spacing = on;
        self
    }

    /// Builder: set `padding`.
    pub const fn with_padding(mut self, on: bool) -> Self {
        self.padding = on;
        self
    }

    /// Builder: set `dimensions`.
    pub const fn with_dimensions(mut self, on: bool) -> Self {
        self.dimensions = on;
        self
    }

    /// Flip `font_size`.
    pub fn toggle_font_size(&mut self) {
        self.font_size = !self.font_size;
    }

    /// Flip `spacing`.
    pub fn toggle_spacing(&mut self) {
        self.spacing = !self.spacing;
    }

    /// Flip `padding`.
    pub fn toggle_padding(&mut self) {
        self.padding = !self.padding;
    }

    /// Flip `dimensions`.
    pub fn toggle_dimensions(&mut self) {
        self.dimensions = !self.dimensions;
    }

    /// Whether any category is active.
    pub const fn any(&self) -> bool {
        self.font_size || self.spacing || self.padding || self.dimensions
    }

    /// Each active category on its own, in the order indicators are emitted
    /// (spacing, padding, font size, dimensions).
    pub fn singles(&self) -> impl Iterator<Item = Self> {
        [
            Self::NONE.with_spacing(self.spacing),
            Self::NONE.with_padding(self.padding),
            Self::NONE.with_font_size(self.font_size),
            Self::NONE.with_dimensions(self.dimensions),
        ]
        .into_iter()
        .filter(Self::any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn default_is_all_off() {
        assert_eq!(ToggleState::default(), ToggleState::NONE);
        assert!(!ToggleState::default().any());
    }

    #[test]
    fn toggles_are_independent() {
        let mut s = ToggleState::NONE;
        s.toggle_spacing();
        s.toggle_dimensions();
        assert_eq!(s, ToggleState::NONE.with_spacing(true).with_dimensions(true));
        s.toggle_spacing();
        assert_eq!(s, ToggleState::NONE.with_dimensions(true));
    }

    #[test]
    fn singles_split_active_categories() {
        let s = ToggleState::NONE.with_padding(true).with_font_size(true);
        let singles: Vec<_> = s.singles().collect();
        assert_eq!(
            singles,
            [
                ToggleState::NONE.with_padding(true),
                ToggleState::NONE.with_font_size(true),
            ]
        );
        assert_eq!(ToggleState::ALL.singles().count(), 4);
    }
}
