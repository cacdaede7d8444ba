// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glade_canvas::AnchorSide;
use kurbo::{Point, Rect, Vec2};

/// Returns the world-space point a side refers to on a node rectangle.
///
/// The four named sides anchor at the midpoint of that rectangle edge;
/// [`AnchorSide::Center`] anchors at the rectangle center. The result is
/// always on the boundary of or inside the rectangle.
#[must_use]
pub fn anchor_point(rect: Rect, side: AnchorSide) -> Point {
    let center = rect.center();
    match side {
        AnchorSide::Top => Point::new(center.x, rect.y0),
        AnchorSide::Bottom => Point::new(center.x, rect.y1),
        AnchorSide::Left => Point::new(rect.x0, center.y),
        AnchorSide::Right => Point::new(rect.x1, center.y),
        AnchorSide::Center => center,
    }
}

/// Returns the unit vector pointing out of a node through the side.
///
/// [`AnchorSide::Center`] has no outward direction and returns zero,
/// which leaves a control point coincident with its anchor (straight
/// tangent).
#[must_use]
pub fn outward_direction(side: AnchorSide) -> Vec2 {
    match side {
        AnchorSide::Top => Vec2::new(0.0, -1.0),
        AnchorSide::Bottom => Vec2::new(0.0, 1.0),
        AnchorSide::Left => Vec2::new(-1.0, 0.0),
        AnchorSide::Right => Vec2::new(1.0, 0.0),
        AnchorSide::Center => Vec2::ZERO,
    }
}
