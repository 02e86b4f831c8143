// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved style properties read by the engine, and pixel parsing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::types::Edge;

/// Resolved style properties the engine queries from a host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// `display`
    Display,
    /// `visibility`
    Visibility,
    /// `margin-top`
    MarginTop,
    /// `margin-right`
    MarginRight,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `padding-top`
    PaddingTop,
    /// `padding-right`
    PaddingRight,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `font-size`
    FontSize,
}

impl StyleProperty {
    /// The margin longhand for `edge`.
    pub const fn margin(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::MarginTop,
            Edge::Right => Self::MarginRight,
            Edge::Bottom => Self::MarginBottom,
            Edge::Left => Self::MarginLeft,
        }
    }

    /// The padding longhand for `edge`.
    pub const fn padding(edge: Edge) -> Self {
        match edge {
            Edge::Top => Self::PaddingTop,
            Edge::Right => Self::PaddingRight,
            Edge::Bottom => Self::PaddingBottom,
            Edge::Left => Self::PaddingLeft,
        }
    }

    /// CSS property name.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Visibility => "visibility",
            Self::MarginTop => "margin-top",
            Self::MarginRight => "margin-right",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::PaddingTop => "padding-top",
            Self::PaddingRight => "padding-right",
            Self::PaddingBottom => "padding-bottom",
            Self::PaddingLeft => "padding-left",
            Self::FontSize => "font-size",
        }
    }
}

/// Parse a resolved CSS length in pixels.
///
/// Accepts an optional `px` suffix and surrounding whitespace. Anything else
/// (missing values, keywords such as `auto`, other units, non-finite numbers)
/// resolves to `0.0`.
///
/// ```rust
/// use understory_space_indicator::parse_px;
///
/// assert_eq!(parse_px("10px"), 10.0);
/// assert_eq!(parse_px(" 2.5 "), 2.5);
/// assert_eq!(parse_px("auto"), 0.0);
/// ```
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim_end();
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Round a pixel value to the nearest integer, halves away from zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Layout coordinates are far inside the i64 range."
)]
pub fn round_px(value: f64) -> i64 {
    value.round() as i64
}
