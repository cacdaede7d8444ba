// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The minimap pass: the whole scene at fit scale, plus the viewport
//! indicator.

use glade_canvas::{CanvasDocument, NodeKind, NodeTable, content_bounds};
use glade_imaging::Surface;
use glade_route::anchor_point;
use glade_viewport::ViewTransform;
use kurbo::{Affine, Rect, Size};

use crate::theme::{ColorScheme, Theme};

/// Fraction of the fitted scale the minimap actually uses, leaving a
/// border around the content.
pub const MINIMAP_MARGIN: f64 = 0.9;

/// Draws the minimap: an always-fit-to-content rendering of the scene
/// with an outline showing the main viewport's visible region.
///
/// The minimap derives its own transform from the content bounds on
/// every pass, so it never depends on the main viewport state, except
/// for the indicator, which inverse-maps the main view's corners into
/// world space and projects that rectangle through the minimap
/// transform. Visibility toggling is the caller's concern: when the
/// minimap is hidden, simply don't call this.
#[derive(Clone, Debug, Default)]
pub struct MinimapRenderer {
    /// Visual constants shared with the scene pass.
    pub theme: Theme,
}

impl MinimapRenderer {
    /// Creates a renderer with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the transform the minimap uses for the given content.
    #[must_use]
    pub fn fit_transform(bounds: Rect, minimap_size: Size) -> ViewTransform {
        ViewTransform::fit_scaled(bounds, minimap_size, MINIMAP_MARGIN)
    }

    /// Draws one minimap frame onto its surface.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        doc: &CanvasDocument,
        table: &NodeTable,
        main: &ViewTransform,
        main_view_size: Size,
        minimap_size: Size,
        scheme: &dyn ColorScheme,
    ) {
        surface.set_transform(Affine::IDENTITY);
        surface.clear(self.theme.minimap_background);

        let Some(bounds) = content_bounds(&doc.nodes) else {
            return;
        };
        let mini = Self::fit_transform(bounds, minimap_size);

        surface.set_transform(mini.world_to_view());

        // Reduced detail: straight anchor-to-anchor lines for edges,
        // solid rectangles for nodes.
        for edge in &doc.edges {
            let Some((from, to)) = table.resolve_edge(edge) else {
                continue;
            };
            let (Some(from), Some(to)) = (doc.nodes.get(from), doc.nodes.get(to)) else {
                continue;
            };
            surface.stroke_line(
                anchor_point(from.rect, edge.from_side),
                anchor_point(to.rect, edge.to_side),
                self.theme.minimap_edge,
                1.0,
            );
        }

        for node in &doc.nodes {
            let colors = scheme.colors_for(node.color.as_deref());
            let fill = if matches!(node.kind, NodeKind::Group { .. }) {
                colors.border
            } else {
                colors.background
            };
            surface.fill_rect(node.rect, fill.with_alpha(self.theme.minimap_node_alpha));
        }

        // The viewport indicator: invert the main view's corners into
        // world space, then project through the minimap transform. This
        // is the only place the two transform spaces interact.
        surface.set_transform(Affine::IDENTITY);
        let visible_world = main.visible_world_rect(main_view_size);
        let indicator = mini.world_to_view_rect(visible_world);
        surface.stroke_rect(indicator, self.theme.minimap_indicator, 2.0);
    }
}
