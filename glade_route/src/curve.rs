// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glade_canvas::{AnchorSide, Edge, Node, NodeTable};
use kurbo::{CubicBez, ParamCurve, Point};

use crate::anchor::{anchor_point, outward_direction};
use crate::arrow::Arrowhead;

/// Tunable routing geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteStyle {
    /// Distance each control point is pushed out from its anchor.
    pub control_padding: f64,
    /// Arrowhead length along the terminal tangent.
    pub arrow_length: f64,
    /// Arrowhead half-width perpendicular to the tangent.
    pub arrow_width: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            control_padding: 150.0,
            arrow_length: 12.0,
            arrow_width: 7.0,
        }
    }
}

/// Drawable geometry for one routed edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRoute {
    /// The connector curve, start anchor to end anchor.
    pub curve: CubicBez,
    /// Tip triangle at the end anchor; absent for degenerate tangents.
    pub arrowhead: Option<Arrowhead>,
    /// Label anchor at the curve's parametric midpoint; present iff the
    /// edge has a label.
    pub label_anchor: Option<Point>,
}

/// Computes the side-biased control points for a connector.
///
/// Each control point is offset from its anchor by `padding` in that
/// side's outward direction, which makes the curve leave and enter
/// perpendicular to the node boundary. [`AnchorSide::Center`] has no
/// outward direction, leaving the control point on the anchor.
#[must_use]
pub fn control_points(
    start: Point,
    end: Point,
    from_side: AnchorSide,
    to_side: AnchorSide,
    padding: f64,
) -> (Point, Point) {
    (
        start + outward_direction(from_side) * padding,
        end + outward_direction(to_side) * padding,
    )
}

/// Routes an edge through the node table into drawable geometry.
///
/// Returns `None` when either endpoint id fails to resolve; such edges
/// are skipped for the pass, and skipping one never affects another.
/// The label anchor is the cubic's value at `t = 0.5`.
#[must_use]
pub fn route_edge(
    edge: &Edge,
    table: &NodeTable,
    nodes: &[Node],
    style: &RouteStyle,
) -> Option<EdgeRoute> {
    let (from_index, to_index) = table.resolve_edge(edge)?;
    let from = nodes.get(from_index)?;
    let to = nodes.get(to_index)?;

    let start = anchor_point(from.rect, edge.from_side);
    let end = anchor_point(to.rect, edge.to_side);
    let (c1, c2) = control_points(start, end, edge.from_side, edge.to_side, style.control_padding);
    let curve = CubicBez::new(start, c1, c2, end);

    Some(EdgeRoute {
        curve,
        arrowhead: Arrowhead::at_curve_end(&curve, style.arrow_length, style.arrow_width),
        label_anchor: edge.label.as_ref().map(|_| curve.eval(0.5)),
    })
}
