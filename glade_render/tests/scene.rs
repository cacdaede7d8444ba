// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end render passes over a small document, asserted against the
//! recording surface's operation log.

use glade_canvas::{AnchorSide, CanvasDocument, Edge, Node, NodeKind, NodeTable};
use glade_imaging::recording::{RecordingSurface, SurfaceOp};
use glade_imaging::ImageRef;
use glade_render::{
    CanvasPalette, ContentEvent, ContentSource, MinimapRenderer, RedrawFlag, RenderCache,
    SceneRenderer, overlay_placements, scrollable_node_at,
};
use glade_viewport::ViewTransform;
use kurbo::{Point, Rect, Size, Vec2};

#[derive(Debug, Default)]
struct StubSource {
    text_requests: Vec<(usize, String)>,
    image_requests: Vec<(usize, String)>,
}

impl ContentSource for StubSource {
    fn request_text(&mut self, node: usize, path: &str) {
        self.text_requests.push((node, path.to_owned()));
    }

    fn request_image(&mut self, node: usize, path: &str) {
        self.image_requests.push((node, path.to_owned()));
    }
}

fn node(id: &str, rect: Rect, kind: NodeKind) -> Node {
    Node {
        id: id.to_owned(),
        rect,
        color: None,
        kind,
    }
}

fn text_node(id: &str, rect: Rect) -> Node {
    node(
        id,
        rect,
        NodeKind::Text {
            text: "hi".to_owned(),
        },
    )
}

fn edge(id: &str, from: &str, to: &str) -> Edge {
    Edge {
        id: id.to_owned(),
        from_node: from.to_owned(),
        to_node: to.to_owned(),
        from_side: AnchorSide::Right,
        to_side: AnchorSide::Left,
        label: None,
    }
}

fn draw_scene(
    doc: &CanvasDocument,
    transform: &ViewTransform,
    cache: &mut RenderCache,
    source: &mut StubSource,
) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    let table = NodeTable::new(&doc.nodes);
    SceneRenderer::new().draw(
        &mut surface,
        doc,
        &table,
        transform,
        Size::new(800.0, 600.0),
        &CanvasPalette,
        cache,
        source,
    );
    surface
}

fn position(ops: &[SurfaceOp], pred: impl Fn(&SurfaceOp) -> bool) -> Option<usize> {
    ops.iter().position(pred)
}

#[test]
fn edges_draw_under_nodes_and_document_order_is_z_order() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(300.0, 0.0, 400.0, 100.0);
    let doc = CanvasDocument {
        nodes: vec![text_node("a", a), text_node("b", b)],
        edges: vec![edge("e", "a", "b")],
    };
    let mut cache = RenderCache::new();
    let mut source = StubSource::default();
    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    let ops = surface.ops();

    let curve = position(ops, |op| matches!(op, SurfaceOp::StrokeCubic(..)))
        .expect("the edge curve is drawn");
    let first = position(ops, |op| matches!(op, SurfaceOp::FillRect(rect, _) if *rect == a))
        .expect("node a body is drawn");
    let second = position(ops, |op| matches!(op, SurfaceOp::FillRect(rect, _) if *rect == b))
        .expect("node b body is drawn");

    assert!(curve < first, "edges render under nodes");
    assert!(first < second, "later nodes draw over earlier ones");

    // The arrowhead tip sits on node b's left anchor.
    let head = ops
        .iter()
        .find_map(|op| match op {
            SurfaceOp::FillTriangle(corners, _) => Some(corners[0]),
            _ => None,
        })
        .expect("arrowhead is drawn");
    assert_eq!(head, Point::new(300.0, 50.0));
}

#[test]
fn unresolved_edge_is_skipped_without_affecting_the_rest() {
    let doc = CanvasDocument {
        nodes: vec![
            text_node("a", Rect::new(0.0, 0.0, 100.0, 100.0)),
            text_node("b", Rect::new(300.0, 0.0, 400.0, 100.0)),
        ],
        edges: vec![edge("dangling", "a", "ghost"), edge("ok", "a", "b")],
    };
    let mut cache = RenderCache::new();
    let mut source = StubSource::default();
    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);

    let curves = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, SurfaceOp::StrokeCubic(..)))
        .count();
    assert_eq!(curves, 1, "only the resolvable edge draws");
}

#[test]
fn markdown_node_requests_text_once_and_renders_it_when_ready() {
    let doc = CanvasDocument {
        nodes: vec![node(
            "notes",
            Rect::new(0.0, 0.0, 300.0, 300.0),
            NodeKind::File {
                file: "notes.md".to_owned(),
            },
        )],
        edges: Vec::new(),
    };
    let mut cache = RenderCache::new();
    let mut source = StubSource::default();

    // First pass: fetch kicked off, placeholder drawn.
    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    assert_eq!(source.text_requests, vec![(0, "notes.md".to_owned())]);
    assert!(
        surface.ops().iter().any(|op| matches!(
            op,
            SurfaceOp::FillText(text, ..) if text.starts_with("Loading")
        )),
        "placeholder shows while loading"
    );

    // Redrawing while in flight must not re-request.
    draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    assert_eq!(source.text_requests.len(), 1);

    // Completion schedules a redraw and the next pass draws the lines.
    let mut redraw = RedrawFlag::default();
    cache.apply(
        ContentEvent::TextReady {
            node: 0,
            text: "alpha\nbeta".to_owned(),
        },
        &mut redraw,
    );
    assert!(redraw.take());

    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    assert_eq!(source.text_requests.len(), 1, "ready content never re-requests");
    for line in ["alpha", "beta"] {
        assert!(
            surface
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::FillText(text, ..) if text == line)),
            "content line {line:?} is drawn"
        );
    }
}

#[test]
fn failed_image_load_degrades_to_a_placeholder() {
    let doc = CanvasDocument {
        nodes: vec![node(
            "pic",
            Rect::new(0.0, 0.0, 116.0, 190.0),
            NodeKind::File {
                file: "cat.png".to_owned(),
            },
        )],
        edges: Vec::new(),
    };
    let mut cache = RenderCache::new();
    let mut source = StubSource::default();
    let mut redraw = RedrawFlag::default();

    draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    assert_eq!(source.image_requests.len(), 1);

    cache.apply(ContentEvent::ImageFailed { node: 0 }, &mut redraw);
    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    assert!(
        surface.ops().iter().any(|op| matches!(
            op,
            SurfaceOp::FillText(text, ..) if text == "Failed to load content"
        )),
        "failure placeholder is drawn"
    );
    assert!(
        !surface
            .ops()
            .iter()
            .any(|op| matches!(op, SurfaceOp::DrawImage(..))),
        "no image is drawn after a failed load"
    );
}

#[test]
fn ready_image_aspect_fits_inside_the_node() {
    let doc = CanvasDocument {
        nodes: vec![node(
            "pic",
            Rect::new(0.0, 0.0, 116.0, 190.0),
            NodeKind::File {
                file: "cat.png".to_owned(),
            },
        )],
        edges: Vec::new(),
    };
    let mut cache = RenderCache::new();
    let mut source = StubSource::default();
    let mut redraw = RedrawFlag::default();

    draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    cache.apply(
        ContentEvent::ImageReady {
            node: 0,
            image: ImageRef {
                id: 9,
                width: 200,
                height: 100,
            },
        },
        &mut redraw,
    );

    let surface = draw_scene(&doc, &ViewTransform::IDENTITY, &mut cache, &mut source);
    let dst = surface
        .ops()
        .iter()
        .find_map(|op| match op {
            SurfaceOp::DrawImage(_, dst) => Some(*dst),
            _ => None,
        })
        .expect("image is drawn once ready");

    // Width-first fit: 116 - 16 = 100 wide, aspect 2 → 50 tall, centered
    // horizontally, 32 below the node top.
    assert_eq!(dst, Rect::new(8.0, 32.0, 108.0, 82.0));
}

#[test]
fn overlay_placements_follow_the_transform() {
    let doc = CanvasDocument {
        nodes: vec![
            node(
                "md",
                Rect::new(0.0, 0.0, 200.0, 100.0),
                NodeKind::File {
                    file: "a.md".to_owned(),
                },
            ),
            node(
                "link",
                Rect::new(300.0, 0.0, 500.0, 150.0),
                NodeKind::Link {
                    url: "https://example.com".to_owned(),
                },
            ),
            text_node("plain", Rect::new(0.0, 200.0, 50.0, 250.0)),
        ],
        edges: Vec::new(),
    };
    let transform = ViewTransform::new(Vec2::new(40.0, -10.0), 2.0);

    let placements = overlay_placements(&doc, &transform);
    assert_eq!(placements.len(), 2, "markdown and link nodes get overlays");

    let md = &placements[0];
    assert_eq!(md.node, 0);
    assert_eq!(md.scale, 2.0);
    assert_eq!(md.rect, transform.world_to_view_rect(doc.nodes[0].rect));
    assert_eq!(md.rect, Rect::new(40.0, -10.0, 440.0, 190.0));
}

#[test]
fn wheel_target_lookup_only_hits_text_bearing_file_nodes() {
    let doc = CanvasDocument {
        nodes: vec![
            node(
                "pic",
                Rect::new(0.0, 0.0, 100.0, 100.0),
                NodeKind::File {
                    file: "cat.png".to_owned(),
                },
            ),
            node(
                "md",
                Rect::new(200.0, 0.0, 300.0, 100.0),
                NodeKind::File {
                    file: "notes.md".to_owned(),
                },
            ),
        ],
        edges: Vec::new(),
    };

    assert_eq!(scrollable_node_at(&doc, Point::new(50.0, 50.0)), None);
    assert_eq!(scrollable_node_at(&doc, Point::new(250.0, 50.0)), Some(1));
    assert_eq!(scrollable_node_at(&doc, Point::new(999.0, 50.0)), None);
}

#[test]
fn minimap_projects_the_main_viewports_visible_region() {
    // Content spans (0,0)..(1800,1200); a 200x150 minimap with the 0.9
    // margin fits it at scale (200/1800) * 0.9 = 0.1.
    let doc = CanvasDocument {
        nodes: vec![
            text_node("tl", Rect::new(0.0, 0.0, 100.0, 100.0)),
            text_node("br", Rect::new(1700.0, 1100.0, 1800.0, 1200.0)),
        ],
        edges: vec![edge("e", "tl", "br")],
    };
    let table = NodeTable::new(&doc.nodes);
    let main = ViewTransform::new(Vec2::ZERO, 1.0);
    let minimap_size = Size::new(200.0, 150.0);

    let mut surface = RecordingSurface::new();
    MinimapRenderer::new().draw(
        &mut surface,
        &doc,
        &table,
        &main,
        Size::new(800.0, 600.0),
        minimap_size,
        &CanvasPalette,
    );
    let ops = surface.ops();

    assert!(
        ops.iter().any(|op| matches!(op, SurfaceOp::StrokeLine(..))),
        "edges draw as straight lines"
    );
    let node_fills = ops
        .iter()
        .filter(|op| matches!(op, SurfaceOp::FillRect(..)))
        .count();
    assert_eq!(node_fills, 2, "each node draws as one rect");

    // The indicator is the last stroke: the main view's visible world
    // rect (0,0)..(800,600) through the minimap transform. With content
    // centered at (900,600) and the minimap center at (100,75), that is
    // (10,15)..(90,75) at scale 0.1.
    let indicator = ops
        .iter()
        .rev()
        .find_map(|op| match op {
            SurfaceOp::StrokeRect(rect, _, _) => Some(*rect),
            _ => None,
        })
        .expect("viewport indicator is drawn");
    assert!((indicator.x0 - 10.0).abs() < 1e-9);
    assert!((indicator.y0 - 15.0).abs() < 1e-9);
    assert!((indicator.x1 - 90.0).abs() < 1e-9);
    assert!((indicator.y1 - 75.0).abs() < 1e-9);

    // And it is exactly the inverse round trip: screen corners mapped
    // to world space, re-projected through the minimap transform.
    let mini = MinimapRenderer::fit_transform(
        Rect::new(0.0, 0.0, 1800.0, 1200.0),
        minimap_size,
    );
    let expected = mini.world_to_view_rect(main.visible_world_rect(Size::new(800.0, 600.0)));
    assert!((indicator.x0 - expected.x0).abs() < 1e-12);
    assert!((indicator.y1 - expected.y1).abs() < 1e-12);
}

#[test]
fn minimap_with_an_empty_document_only_clears() {
    let doc = CanvasDocument::default();
    let table = NodeTable::new(&doc.nodes);
    let mut surface = RecordingSurface::new();
    MinimapRenderer::new().draw(
        &mut surface,
        &doc,
        &table,
        &ViewTransform::IDENTITY,
        Size::new(800.0, 600.0),
        Size::new(200.0, 150.0),
        &CanvasPalette,
    );

    assert!(
        surface
            .ops()
            .iter()
            .all(|op| matches!(op, SurfaceOp::Clear(_) | SurfaceOp::SetTransform(_))),
        "no geometry is drawn for an empty scene"
    );
}
