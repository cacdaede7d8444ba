// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme values and the color-category lookup boundary.

use peniko::Color;

/// The foreground/border/background triple a color token resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTriple {
    /// Fill color for node bodies (alpha is applied at draw sites).
    pub background: Color,
    /// Outline color.
    pub border: Color,
    /// Text color drawn on top of the background.
    pub foreground: Color,
}

impl Default for ColorTriple {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x36, 0x36, 0x36, 0xff),
            border: Color::from_rgba8(0x5a, 0x5a, 0x5a, 0xff),
            foreground: Color::from_rgba8(0xe0, 0xe0, 0xe0, 0xff),
        }
    }
}

/// Resolves a node's color-category token into a [`ColorTriple`].
///
/// This is a total function: unrecognized or absent tokens resolve to
/// the default triple. Embedders supply their own scheme to restyle the
/// canvas; [`CanvasPalette`] is the built-in one.
pub trait ColorScheme {
    /// Returns the triple for a token.
    fn colors_for(&self, token: Option<&str>) -> ColorTriple;
}

/// The built-in palette over the numeric category tokens `"1"`–`"6"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasPalette;

impl ColorScheme for CanvasPalette {
    fn colors_for(&self, token: Option<&str>) -> ColorTriple {
        let accent = match token {
            Some("1") => Color::from_rgba8(0xfb, 0x46, 0x4c, 0xff),
            Some("2") => Color::from_rgba8(0xe9, 0x97, 0x3f, 0xff),
            Some("3") => Color::from_rgba8(0xe0, 0xde, 0x71, 0xff),
            Some("4") => Color::from_rgba8(0x44, 0xcf, 0x6e, 0xff),
            Some("5") => Color::from_rgba8(0x53, 0xdf, 0xdd, 0xff),
            Some("6") => Color::from_rgba8(0xa8, 0x82, 0xff, 0xff),
            _ => return ColorTriple::default(),
        };
        ColorTriple {
            background: accent,
            border: accent,
            foreground: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
        }
    }
}

/// Visual constants for the scene and minimap passes.
///
/// Everything a redraw needs beyond the document and the transforms
/// lives here, so there are no drawing constants buried in the
/// renderers.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Canvas background fill.
    pub background: Color,
    /// Grid dot color.
    pub grid_dot: Color,
    /// Lower bound on grid spacing, in world units.
    pub grid_base: f64,

    /// Edge curve and arrowhead color.
    pub edge_stroke: Color,
    /// Edge curve stroke width, in world units.
    pub edge_width: f64,
    /// Edge label text size.
    pub edge_label_size: f64,
    /// Edge label chip fill.
    pub edge_label_background: Color,
    /// Edge label text color.
    pub edge_label_foreground: Color,

    /// Text node body fill.
    pub text_fill: Color,
    /// Text node outline.
    pub text_border: Color,
    /// Text node content color.
    pub text_foreground: Color,
    /// Content text size.
    pub text_size: f64,
    /// Vertical advance between content lines.
    pub line_height: f64,

    /// File path label text size.
    pub file_label_size: f64,
    /// File category badge text size.
    pub badge_size: f64,
    /// Placeholder drawn while file content is loading.
    pub loading_placeholder: String,
    /// Placeholder drawn when a file load failed.
    pub failed_placeholder: String,

    /// Link node fill and outline color.
    pub link_color: Color,
    /// Link URL text color.
    pub link_foreground: Color,

    /// Group label chip text size (before chip scaling).
    pub group_label_size: f64,

    /// Minimap background fill.
    pub minimap_background: Color,
    /// Minimap node fill alpha.
    pub minimap_node_alpha: f32,
    /// Minimap edge line color.
    pub minimap_edge: Color,
    /// Viewport indicator outline color.
    pub minimap_indicator: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x22, 0x22, 0x22, 0xff),
            grid_dot: Color::from_rgba8(0x3a, 0x3a, 0x3a, 0xff),
            grid_base: 20.0,

            edge_stroke: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            edge_width: 2.0,
            edge_label_size: 18.0,
            edge_label_background: Color::from_rgba8(0x22, 0x22, 0x22, 0xff),
            edge_label_foreground: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),

            text_fill: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            text_border: Color::from_rgba8(0x55, 0x55, 0x55, 0xff),
            text_foreground: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
            text_size: 18.0,
            line_height: 22.0,

            file_label_size: 16.0,
            badge_size: 12.0,
            loading_placeholder: "Loading\u{2026}".to_owned(),
            failed_placeholder: "Failed to load content".to_owned(),

            link_color: Color::from_rgba8(0x18, 0x80, 0x38, 0xff),
            link_foreground: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),

            group_label_size: 16.0,

            minimap_background: Color::from_rgba8(0x33, 0x33, 0x33, 0xff),
            minimap_node_alpha: 0.6,
            minimap_edge: Color::from_rgba8(0x66, 0x66, 0x66, 0xff),
            minimap_indicator: Color::from_rgba8(0xff, 0xff, 0xff, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasPalette, ColorScheme, ColorTriple};

    #[test]
    fn unknown_and_absent_tokens_resolve_to_the_default_triple() {
        let palette = CanvasPalette;
        assert_eq!(palette.colors_for(None), ColorTriple::default());
        assert_eq!(palette.colors_for(Some("teal")), ColorTriple::default());
        assert_eq!(palette.colors_for(Some("99")), ColorTriple::default());
    }

    #[test]
    fn numeric_tokens_resolve_to_distinct_accents() {
        let palette = CanvasPalette;
        let one = palette.colors_for(Some("1"));
        let four = palette.colors_for(Some("4"));
        assert_ne!(one.background, four.background);
        assert_eq!(one.background, one.border);
    }
}
