// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The main scene pass: edges under nodes, document order as z-order.

use glade_canvas::{CanvasDocument, FileCategory, Node, NodeKind, NodeTable, file_badge};
use glade_imaging::Surface;
use glade_route::{EdgeRoute, RouteStyle, route_edge};
use glade_viewport::ViewTransform;
use kurbo::{Affine, Point, Rect, RoundedRect, Size};
use log::debug;

use crate::cache::{ContentSource, LoadState, RenderCache};
use crate::theme::{ColorScheme, ColorTriple, Theme};

/// Horizontal gutter inside a file node when aspect-fitting an image.
const IMAGE_GUTTER: f64 = 16.0;
/// Vertical chrome reserved above and below fitted images and text.
const CONTENT_CHROME: f64 = 40.0;
/// Distance from the node top to where content starts.
const CONTENT_TOP: f64 = 32.0;
/// Group label chips render at this fraction of their base metrics.
const CHIP_SCALE: f64 = 0.8;

/// A node's current screen-space placement, for the overlay collaborator.
///
/// The core computes the rectangle and scale; the collaborator positions
/// its own DOM/embed content there and never derives the transform
/// itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Index of the node in the document.
    pub node: usize,
    /// The node's rectangle in view space.
    pub rect: Rect,
    /// The current scale factor, for content that scales itself.
    pub scale: f64,
}

/// Draws the full scene for one redraw pass.
///
/// A pass clears the background, draws the grid dots, then (under the
/// composed world → view transform) all edges followed by all nodes in
/// document order (edges under nodes, later nodes over earlier ones),
/// and finally the screen-space group label chips. Nodes whose content
/// has not arrived yet draw a placeholder and request the fetch through
/// the [`ContentSource`]; the resulting completion schedules the next
/// redraw.
#[derive(Clone, Debug, Default)]
pub struct SceneRenderer {
    /// Visual constants for the pass.
    pub theme: Theme,
    /// Edge routing geometry constants.
    pub route_style: RouteStyle,
}

impl SceneRenderer {
    /// Creates a renderer with the default theme and routing style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one frame of the scene.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        doc: &CanvasDocument,
        table: &NodeTable,
        transform: &ViewTransform,
        view_size: Size,
        scheme: &dyn ColorScheme,
        cache: &mut RenderCache,
        content: &mut dyn ContentSource,
    ) {
        surface.set_transform(Affine::IDENTITY);
        surface.clear(self.theme.background);
        self.draw_grid(surface, transform, view_size);

        surface.set_transform(transform.world_to_view());

        for edge in &doc.edges {
            match route_edge(edge, table, &doc.nodes, &self.route_style) {
                Some(route) => self.draw_edge(surface, edge.label.as_deref(), &route),
                None => debug!("skipping edge {:?}: unresolved endpoint", edge.id),
            }
        }

        let mut chips = Vec::new();
        for (index, node) in doc.nodes.iter().enumerate() {
            match &node.kind {
                NodeKind::Group { label } => {
                    let colors = scheme.colors_for(node.color.as_deref());
                    surface.fill_rect(node.rect, colors.background.with_alpha(0.08));
                    surface.stroke_rect(node.rect, colors.border, 2.0);
                    if let Some(label) = label {
                        chips.push((node.rect.origin(), label.as_str(), colors));
                    }
                }
                NodeKind::Text { text } => self.draw_text_node(surface, node.rect, text),
                NodeKind::File { file } => {
                    self.draw_file_node(surface, index, node, file, scheme, cache, content);
                }
                NodeKind::Link { url } => self.draw_link_node(surface, node.rect, url),
            }
        }

        // Label chips keep a constant on-screen size, so they are drawn
        // untransformed at the node corner's view-space position.
        surface.set_transform(Affine::IDENTITY);
        for (origin, label, colors) in chips {
            self.draw_group_chip(surface, transform.world_to_view_point(origin), label, colors);
        }
    }

    fn draw_grid(&self, surface: &mut dyn Surface, transform: &ViewTransform, view_size: Size) {
        let spacing = transform.grid_spacing(self.theme.grid_base);
        let visible = transform.visible_world_rect(view_size);

        let mut x = (visible.x0 / spacing).floor() * spacing;
        while x <= visible.x1 {
            let mut y = (visible.y0 / spacing).floor() * spacing;
            while y <= visible.y1 {
                let dot = transform.world_to_view_point(Point::new(x, y));
                surface.fill_rect(
                    Rect::new(dot.x - 1.0, dot.y - 1.0, dot.x + 1.0, dot.y + 1.0),
                    self.theme.grid_dot,
                );
                y += spacing;
            }
            x += spacing;
        }
    }

    fn draw_edge(&self, surface: &mut dyn Surface, label: Option<&str>, route: &EdgeRoute) {
        let theme = &self.theme;
        surface.stroke_cubic(route.curve, theme.edge_stroke, theme.edge_width);
        if let Some(head) = route.arrowhead {
            surface.fill_triangle(head.points(), theme.edge_stroke);
        }

        if let (Some(anchor), Some(label)) = (route.label_anchor, label) {
            let text_width = surface.measure_text(label, theme.edge_label_size);
            let pad = 8.0;
            let half_height = 10.0;
            let chip = Rect::new(
                anchor.x - text_width / 2.0 - pad,
                anchor.y - half_height - 2.0,
                anchor.x + text_width / 2.0 + pad,
                anchor.y + half_height - 2.0,
            );
            surface.fill_rounded_rect(
                RoundedRect::new(chip.x0, chip.y0, chip.x1, chip.y1, 4.0),
                theme.edge_label_background,
            );
            surface.fill_text(
                label,
                Point::new(
                    anchor.x - text_width / 2.0,
                    anchor.y + theme.edge_label_size * 0.3 - 2.0,
                ),
                theme.edge_label_size,
                theme.edge_label_foreground,
            );
        }
    }

    fn draw_text_node(&self, surface: &mut dyn Surface, rect: Rect, text: &str) {
        let theme = &self.theme;
        surface.fill_rect(rect, theme.text_fill.with_alpha(0.7));
        surface.stroke_rect(rect, theme.text_border, 1.0);
        for (i, line) in text.split('\n').enumerate() {
            surface.fill_text(
                line,
                Point::new(rect.x0 + 5.0, rect.y0 + (i as f64 + 1.0) * theme.line_height),
                theme.text_size,
                theme.text_foreground,
            );
        }
    }

    fn draw_file_node(
        &self,
        surface: &mut dyn Surface,
        index: usize,
        node: &Node,
        file: &str,
        scheme: &dyn ColorScheme,
        cache: &mut RenderCache,
        content: &mut dyn ContentSource,
    ) {
        let theme = &self.theme;
        let rect = node.rect;
        let colors = scheme.colors_for(node.color.as_deref());

        surface.fill_rect(rect, colors.background.with_alpha(0.3));
        surface.stroke_rect(rect, colors.border, 2.0);
        surface.fill_text(
            file,
            Point::new(rect.x0 + 5.0, rect.y0 - 10.0),
            theme.file_label_size,
            colors.foreground,
        );
        surface.fill_text(
            &file_badge(file),
            Point::new(rect.x1 - 50.0, rect.y0 + 24.0),
            theme.badge_size,
            colors.foreground,
        );

        match FileCategory::from_path(file) {
            FileCategory::Image => {
                self.draw_image_content(surface, index, rect, file, colors, cache, content);
            }
            FileCategory::Markdown | FileCategory::Plain => {
                self.draw_text_content(surface, index, rect, file, colors, cache, content);
            }
            // Audio, video, and PDF previews are modal chrome owned by
            // the embedder; the node itself is just badge plus frame.
            _ => {}
        }
    }

    fn draw_image_content(
        &self,
        surface: &mut dyn Surface,
        index: usize,
        rect: Rect,
        file: &str,
        colors: ColorTriple,
        cache: &mut RenderCache,
        content: &mut dyn ContentSource,
    ) {
        let entry = cache.entry(index);
        let image = match &entry.image {
            LoadState::Unrequested => {
                content.request_image(index, file);
                entry.image = LoadState::Loading;
                return self.draw_placeholder(surface, rect, colors, false);
            }
            LoadState::Loading => return self.draw_placeholder(surface, rect, colors, false),
            LoadState::Failed => return self.draw_placeholder(surface, rect, colors, true),
            LoadState::Ready(image) => *image,
        };

        let Some(aspect) = image.aspect_ratio() else {
            return;
        };
        let mut width = rect.width() - IMAGE_GUTTER;
        let mut height = width / aspect;
        if height > rect.height() - CONTENT_CHROME {
            height = rect.height() - CONTENT_CHROME;
            width = height * aspect;
        }
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let x = rect.x0 + (rect.width() - width) / 2.0;
        let y = rect.y0 + CONTENT_TOP;
        surface.draw_image(image, Rect::new(x, y, x + width, y + height));
    }

    fn draw_text_content(
        &self,
        surface: &mut dyn Surface,
        index: usize,
        rect: Rect,
        file: &str,
        colors: ColorTriple,
        cache: &mut RenderCache,
        content: &mut dyn ContentSource,
    ) {
        let theme = &self.theme;
        let entry = cache.entry(index);
        let text = match &entry.text {
            LoadState::Unrequested => {
                content.request_text(index, file);
                entry.text = LoadState::Loading;
                return self.draw_placeholder(surface, rect, colors, false);
            }
            LoadState::Loading => return self.draw_placeholder(surface, rect, colors, false),
            LoadState::Failed => return self.draw_placeholder(surface, rect, colors, true),
            LoadState::Ready(text) => text,
        };

        let scroll = entry.scroll_offset;
        let line_count = text.lines().count();
        entry.content_height = Some(line_count as f64 * theme.line_height);

        for (i, line) in text.lines().enumerate() {
            let y = rect.y0 + CONTENT_TOP + (i as f64 + 1.0) * theme.line_height - scroll;
            if y < rect.y0 + CONTENT_TOP {
                continue;
            }
            if y > rect.y1 - (CONTENT_CHROME - CONTENT_TOP) {
                break;
            }
            surface.fill_text(
                line,
                Point::new(rect.x0 + 8.0, y),
                theme.text_size,
                colors.foreground,
            );
        }
    }

    fn draw_link_node(&self, surface: &mut dyn Surface, rect: Rect, url: &str) {
        let theme = &self.theme;
        surface.fill_rect(rect, theme.link_color.with_alpha(0.3));
        surface.stroke_rect(rect, theme.link_color, 2.0);
        surface.fill_text(
            url,
            Point::new(rect.x0 + 8.0, rect.y0 + 24.0),
            theme.file_label_size,
            theme.link_foreground,
        );
    }

    fn draw_placeholder(
        &self,
        surface: &mut dyn Surface,
        rect: Rect,
        colors: ColorTriple,
        failed: bool,
    ) {
        let message = if failed {
            &self.theme.failed_placeholder
        } else {
            &self.theme.loading_placeholder
        };
        surface.fill_text(
            message,
            Point::new(rect.x0 + 8.0, rect.y0 + CONTENT_TOP + self.theme.line_height),
            self.theme.text_size,
            colors.foreground,
        );
    }

    fn draw_group_chip(
        &self,
        surface: &mut dyn Surface,
        origin: Point,
        label: &str,
        colors: ColorTriple,
    ) {
        let height = 30.0 * CHIP_SCALE;
        let width = 80.0 * CHIP_SCALE;
        let radius = 6.0 * CHIP_SCALE;
        let gap = 8.0 * CHIP_SCALE;
        let chip = Rect::new(origin.x, origin.y - height - gap, origin.x + width, origin.y - gap);
        surface.fill_rounded_rect(
            RoundedRect::new(chip.x0, chip.y0, chip.x1, chip.y1, radius),
            colors.background,
        );
        surface.fill_text(
            label,
            Point::new(chip.x0 + 6.0 * CHIP_SCALE, chip.y0 + height * 0.65),
            self.theme.group_label_size * CHIP_SCALE,
            colors.foreground,
        );
    }
}

/// Computes the screen-space placements of overlay-bearing nodes.
///
/// Link nodes (embedded web content) and markdown file nodes (rich
/// rendered markup) are positioned by an external overlay collaborator;
/// this gives it the view-space rectangle and scale for each.
#[must_use]
pub fn overlay_placements(doc: &CanvasDocument, transform: &ViewTransform) -> Vec<OverlayPlacement> {
    doc.nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| match &node.kind {
            NodeKind::Link { .. } => true,
            NodeKind::File { file } => FileCategory::from_path(file) == FileCategory::Markdown,
            _ => false,
        })
        .map(|(node, n)| OverlayPlacement {
            node,
            rect: transform.world_to_view_rect(n.rect),
            scale: transform.scale(),
        })
        .collect()
}

/// Finds the first scroll-accepting node under a world-space point.
///
/// Wheel input over such a node scrolls its content instead of panning
/// the canvas; the embedder routes the delta to
/// [`RenderCache::scroll_by`].
#[must_use]
pub fn scrollable_node_at(doc: &CanvasDocument, world: Point) -> Option<usize> {
    doc.nodes.iter().enumerate().find_map(|(i, node)| {
        let NodeKind::File { file } = &node.kind else {
            return None;
        };
        let scrolls = matches!(
            FileCategory::from_path(file),
            FileCategory::Markdown | FileCategory::Plain
        );
        (scrolls && node.rect.contains(world)).then_some(i)
    })
}
