// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Route: directional edge connectors between canvas nodes.
//!
//! Given two nodes and a named anchor side on each, this crate computes
//! the geometry a renderer needs to draw a smooth connector:
//!
//! - [`anchor_point`]: the point on a node's rectangle a side refers to
//!   (edge midpoints for the four named sides, the center otherwise).
//!   Total; it never fails.
//! - [`control_points`]: side-biased cubic Bézier control points. Each
//!   control point is pushed away from its anchor in the side's outward
//!   direction, so the curve departs and arrives perpendicular to the
//!   node boundary regardless of where the nodes sit relative to each
//!   other.
//! - [`route_edge`]: endpoint resolution through the node table plus the
//!   full [`EdgeRoute`]: curve, optional arrowhead, and the label
//!   anchor at the curve's parametric midpoint. An edge whose endpoint
//!   is missing yields `None` and is simply skipped by callers.
//! - [`Arrowhead`]: the isosceles tip triangle derived from the curve's
//!   terminal tangent, with a zero-length-tangent guard.
//!
//! All geometry is in world space; renderers draw it under the current
//! view transform.

mod anchor;
mod arrow;
mod curve;

pub use anchor::{anchor_point, outward_direction};
pub use arrow::Arrowhead;
pub use curve::{EdgeRoute, RouteStyle, control_points, route_edge};
