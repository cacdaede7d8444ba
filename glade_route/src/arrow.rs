// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{CubicBez, Point, Vec2};

/// The filled triangle drawn at an edge's target anchor.
///
/// An isosceles triangle: the tip sits on the end anchor and the two
/// back corners are offset perpendicular to the curve's terminal
/// tangent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
    /// Apex, on the end anchor.
    pub tip: Point,
    /// Back corner on the tangent-left side.
    pub left: Point,
    /// Back corner on the tangent-right side.
    pub right: Point,
}

impl Arrowhead {
    /// Builds the arrowhead for a curve's end point.
    ///
    /// The terminal tangent direction is `end - c2` (the end point minus
    /// its adjacent control point), normalized. When that vector has
    /// zero length there is no usable direction and no arrowhead is
    /// produced; this guard is what keeps degenerate edges from
    /// dividing by zero.
    #[must_use]
    pub fn at_curve_end(curve: &CubicBez, length: f64, width: f64) -> Option<Self> {
        let tangent = curve.p3 - curve.p2;
        let magnitude = tangent.hypot();
        if magnitude == 0.0 {
            return None;
        }
        let unit = tangent / magnitude;
        let back = curve.p3.to_vec2() - unit * length;
        let perp = Vec2::new(-unit.y, unit.x) * width;
        Some(Self {
            tip: curve.p3,
            left: (back + perp).to_point(),
            right: (back - perp).to_point(),
        })
    }

    /// Returns the triangle's corners in drawing order.
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.tip, self.left, self.right]
    }
}
