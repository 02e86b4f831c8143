// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved style declarations.
//!
//! Values are stored as the strings a computed-style query would return
//! (`"10px"`, `"none"`, ...). Interpreting them is left to consumers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Box shorthands expanded into their `-top/-right/-bottom/-left` longhands.
const BOX_SHORTHANDS: [&str; 2] = ["margin", "padding"];

/// Resolved longhand declarations of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    decls: HashMap<String, String>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `property: value; property: value` declaration list.
    ///
    /// Malformed entries (no `:`) are ignored.
    ///
    /// ```rust
    /// use understory_layout_tree::Style;
    ///
    /// let style = Style::parse("margin: 10px 0 0 0; font-size: 16px");
    /// assert_eq!(style.get("margin-top"), Some("10px"));
    /// assert_eq!(style.get("margin-left"), Some("0"));
    /// assert_eq!(style.get("font-size"), Some("16px"));
    /// ```
    pub fn parse(declarations: &str) -> Self {
        let mut style = Self::new();
        for decl in declarations.split(';') {
            if let Some((property, value)) = decl.split_once(':') {
                style.set(property, value);
            }
        }
        style
    }

    /// Set a declaration.
    ///
    /// `margin` and `padding` accept the usual one to four value forms and
    /// are stored as their four longhands. Property names are trimmed and
    /// lowercased; values are trimmed.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if property.is_empty() {
            return;
        }
        if BOX_SHORTHANDS.contains(&property.as_str()) {
            let parts: Vec<&str> = value.split_whitespace().collect();
            let [top, right, bottom, left] = match parts.as_slice() {
                [all] => [*all; 4],
                [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
                [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
                [top, right, bottom, left] => [*top, *right, *bottom, *left],
                // Not a valid shorthand; keep it verbatim so lookups see garbage, not nothing.
                _ => {
                    self.decls.insert(property, value.to_string());
                    return;
                }
            };
            for (side, v) in [("top", top), ("right", right), ("bottom", bottom), ("left", left)] {
                self.decls
                    .insert(alloc::format!("{property}-{side}"), v.to_string());
            }
            return;
        }
        self.decls.insert(property, value.to_string());
    }

    /// Look up a longhand declaration.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls.get(property).map(String::as_str)
    }

    /// Number of stored declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Whether no declarations are stored.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_forms_expand() {
        let s = Style::parse("margin: 1px; padding: 2px 3px");
        for side in ["top", "right", "bottom", "left"] {
            assert_eq!(
                s.get(&alloc::format!("margin-{side}")),
                Some("1px"),
                "single value applies to all sides"
            );
        }
        assert_eq!(s.get("padding-top"), Some("2px"));
        assert_eq!(s.get("padding-right"), Some("3px"));
        assert_eq!(s.get("padding-bottom"), Some("2px"));
        assert_eq!(s.get("padding-left"), Some("3px"));

        let s = Style::parse("margin: 1px 2px 3px");
        assert_eq!(s.get("margin-left"), Some("2px"), "three values mirror right");
        assert_eq!(s.get("margin-bottom"), Some("3px"));
    }

    #[test]
    fn later_declarations_win_and_names_normalize() {
        let s = Style::parse(" Margin-Top : 4px ; margin-top: 5px;junk; ");
        assert_eq!(s.get("margin-top"), Some("5px"));
        assert_eq!(s.len(), 1, "malformed entries are ignored");
    }

    #[test]
    fn invalid_shorthand_is_kept_verbatim() {
        let s = Style::parse("margin: 1px 2px 3px 4px 5px");
        assert_eq!(s.get("margin"), Some("1px 2px 3px 4px 5px"));
        assert_eq!(s.get("margin-top"), None);
    }
}
