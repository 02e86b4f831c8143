// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete colors for [`ColorToken`]s.

use core::fmt;

use crate::types::ColorToken;

/// An sRGB color with straight alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Create a color.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Formats as a CSS `rgba()` value.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Maps every [`ColorToken`] to a color.
///
/// Margin edges get distinct colors so all four bands stay distinguishable
/// when drawn at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Top margin band.
    pub margin_top: Rgba,
    /// Right margin band.
    pub margin_right: Rgba,
    /// Bottom margin band.
    pub margin_bottom: Rgba,
    /// Left margin band.
    pub margin_left: Rgba,
    /// Padding band fill.
    pub padding: Rgba,
    /// Padding / content separator line.
    pub padding_border: Rgba,
    /// Gap band.
    pub gap: Rgba,
    /// Font-size label background.
    pub font_size: Rgba,
    /// Dimension box.
    pub dimension: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            margin_top: Rgba::new(0, 0, 255, 0.3),
            margin_right: Rgba::new(0, 255, 0, 0.3),
            margin_bottom: Rgba::new(255, 0, 0, 0.3),
            margin_left: Rgba::new(255, 255, 0, 0.3),
            padding: Rgba::new(255, 255, 0, 0.8),
            padding_border: Rgba::new(0, 0, 255, 1.0),
            gap: Rgba::new(255, 255, 0, 0.8),
            font_size: Rgba::new(255, 255, 255, 0.8),
            dimension: Rgba::new(255, 0, 255, 0.15),
        }
    }
}

impl Palette {
    /// The color for `token`.
    pub fn color(&self, token: ColorToken) -> Rgba {
        match token {
            ColorToken::MarginTop => self.margin_top,
            ColorToken::MarginRight => self.margin_right,
            ColorToken::MarginBottom => self.margin_bottom,
            ColorToken::MarginLeft => self.margin_left,
            ColorToken::Padding => self.padding,
            ColorToken::PaddingBorder => self.padding_border,
            ColorToken::Gap => self.gap,
            ColorToken::FontSize => self.font_size,
            ColorToken::Dimension => self.dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;
    use alloc::string::ToString;

    #[test]
    fn margin_edges_are_distinct() {
        let p = Palette::default();
        let colors = Edge::ALL.map(|e| p.color(ColorToken::margin(e)));
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b, "every margin edge needs its own color");
            }
        }
    }

    #[test]
    fn formats_as_css() {
        assert_eq!(Rgba::new(0, 0, 255, 0.3).to_string(), "rgba(0, 0, 255, 0.3)");
        assert_eq!(Rgba::new(1, 2, 3, 1.0).to_string(), "rgba(1, 2, 3, 1)");
    }
}
