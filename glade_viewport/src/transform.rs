// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// An offset + uniform scale mapping between world and view space.
///
/// The forward mapping is `view = offset + world * scale`; the inverse
/// is rebuilt alongside it so conversion in both directions is a single
/// affine application. The pair is an exact algebraic inverse for any
/// `scale > 0` (round trips hold to floating-point tolerance).
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    offset: Vec2,
    scale: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// The identity mapping: no pan, scale 1.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        world_to_view: Affine::IDENTITY,
        view_to_world: Affine::IDENTITY,
    };

    /// Creates a transform from a view-space offset and a uniform scale.
    ///
    /// Non-positive or non-finite scales are nudged to the smallest
    /// positive value so the inverse always exists.
    #[must_use]
    pub fn new(offset: Vec2, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            f64::MIN_POSITIVE
        };
        // View = translate(offset) ∘ scale, so the offset is in view space.
        let world_to_view = Affine::translate(offset) * Affine::scale(scale);
        Self {
            offset,
            scale,
            world_to_view,
            view_to_world: world_to_view.inverse(),
        }
    }

    /// Returns the view-space pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the composed world → view affine.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Converts a world-space point into view space.
    #[must_use]
    pub fn world_to_view_point(&self, p: Point) -> Point {
        self.world_to_view * p
    }

    /// Converts a view-space point into world space.
    #[must_use]
    pub fn view_to_world_point(&self, p: Point) -> Point {
        self.view_to_world * p
    }

    /// Converts a world-space rectangle into view space.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        map_rect(self.world_to_view, rect)
    }

    /// Converts a view-space rectangle into world space.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        map_rect(self.view_to_world, rect)
    }

    /// Returns the world-space region visible through a view of `size`.
    #[must_use]
    pub fn visible_world_rect(&self, size: Size) -> Rect {
        self.view_to_world_rect(size.to_rect())
    }

    /// Fits `bounds` (inflated by `padding` on every side) into a view of
    /// `view_size`, preserving aspect ratio and centering the content.
    ///
    /// The scale is the largest value such that the padded bounds fit on
    /// both axes; one axis may under-fill. Degenerate input (empty view
    /// or empty padded bounds) yields the identity transform.
    #[must_use]
    pub fn fit(bounds: Rect, view_size: Size, padding: f64) -> Self {
        let content = bounds.inflate(padding, padding);
        if content.width() <= 0.0
            || content.height() <= 0.0
            || view_size.width <= 0.0
            || view_size.height <= 0.0
        {
            return Self::IDENTITY;
        }
        let scale = (view_size.width / content.width()).min(view_size.height / content.height());
        Self::centered_on(bounds.center(), view_size, scale)
    }

    /// Minimap fit: like [`ViewTransform::fit`] with no padding, but the
    /// resulting scale is multiplied by `margin` (< 1) to leave a border
    /// around the content.
    #[must_use]
    pub fn fit_scaled(bounds: Rect, view_size: Size, margin: f64) -> Self {
        if bounds.width() <= 0.0
            || bounds.height() <= 0.0
            || view_size.width <= 0.0
            || view_size.height <= 0.0
        {
            return Self::IDENTITY;
        }
        let scale =
            (view_size.width / bounds.width()).min(view_size.height / bounds.height()) * margin;
        Self::centered_on(bounds.center(), view_size, scale)
    }

    /// Builds the transform placing `world_center` at the view center
    /// under the given scale.
    #[must_use]
    pub fn centered_on(world_center: Point, view_size: Size, scale: f64) -> Self {
        let view_center = view_size.to_vec2() / 2.0;
        Self::new(view_center - world_center.to_vec2() * scale, scale)
    }

    /// Suggests a grid spacing in world units for the current scale.
    ///
    /// Steps along a 1-2-5 ladder so grid marks land roughly
    /// [`GRID_TARGET_PX`] pixels apart, with `base` as a lower bound on
    /// the spacing in world units.
    ///
    /// [`GRID_TARGET_PX`]: Self::GRID_TARGET_PX
    #[must_use]
    pub fn grid_spacing(&self, base: f64) -> f64 {
        let base = base.abs().max(f64::MIN_POSITIVE);
        let desired = (Self::GRID_TARGET_PX / self.scale).max(base);

        let mut unit = 1.0_f64;
        while unit * 10.0 <= desired {
            unit *= 10.0;
        }
        loop {
            for m in [1.0_f64, 2.0, 5.0, 10.0] {
                let step = m * unit;
                if step >= desired {
                    return step;
                }
            }
            unit *= 10.0;
        }
    }

    /// Target on-screen distance between grid marks, in pixels.
    pub const GRID_TARGET_PX: f64 = 64.0;
}

/// Maps a rect through an affine by transforming its corners and taking
/// their bounding box. Exact for the axis-aligned uniform-scale
/// transforms used here.
fn map_rect(affine: Affine, rect: Rect) -> Rect {
    let corners = [
        affine * Point::new(rect.x0, rect.y0),
        affine * Point::new(rect.x1, rect.y0),
        affine * Point::new(rect.x0, rect.y1),
        affine * Point::new(rect.x1, rect.y1),
    ];
    let mut out = Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
    for p in &corners[1..] {
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ViewTransform;

    #[test]
    fn world_view_round_trip() {
        let transform = ViewTransform::new(Vec2::new(133.0, -48.5), 2.75);
        for p in [
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
            Point::new(-321.5, 1000.25),
        ] {
            let there = transform.world_to_view_point(p);
            let back = transform.view_to_world_point(there);
            assert!((back.x - p.x).abs() < 1e-9, "x round trip for {p:?}");
            assert!((back.y - p.y).abs() < 1e-9, "y round trip for {p:?}");
        }
    }

    #[test]
    fn forward_mapping_is_offset_plus_scaled_point() {
        let transform = ViewTransform::new(Vec2::new(100.0, 50.0), 2.0);
        let view = transform.world_to_view_point(Point::new(10.0, 20.0));
        assert_eq!(view, Point::new(120.0, 90.0));
    }

    #[test]
    fn fit_centers_content_and_preserves_aspect() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 100.0);
        let view_size = Size::new(800.0, 600.0);
        let transform = ViewTransform::fit(bounds, view_size, 0.0);

        // Width-limited: scale 2, content centered.
        assert!((transform.scale() - 2.0).abs() < 1e-12);
        let center = transform.world_to_view_point(bounds.center());
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);

        // The fitted bounds sit inside the view on both axes.
        let fitted = transform.world_to_view_rect(bounds);
        assert!(fitted.x0 >= -1e-9 && fitted.x1 <= 800.0 + 1e-9);
        assert!(fitted.y0 >= -1e-9 && fitted.y1 <= 600.0 + 1e-9);
    }

    #[test]
    fn fit_accounts_for_padding() {
        let bounds = Rect::new(0.0, 0.0, 700.0, 500.0);
        let transform = ViewTransform::fit(bounds, Size::new(800.0, 600.0), 50.0);
        // Padded content is exactly 800x600, so the fit is 1:1.
        assert!((transform.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fit_of_degenerate_input_is_identity() {
        let empty = Rect::new(5.0, 5.0, 5.0, 5.0);
        let transform = ViewTransform::fit(empty, Size::new(800.0, 600.0), 0.0);
        assert_eq!(transform.scale(), 1.0);
        assert_eq!(transform.offset(), Vec2::ZERO);

        let transform = ViewTransform::fit(Rect::new(0.0, 0.0, 10.0, 10.0), Size::ZERO, 10.0);
        assert_eq!(transform.scale(), 1.0);
    }

    #[test]
    fn fit_scaled_leaves_a_margin() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let view_size = Size::new(200.0, 150.0);
        let transform = ViewTransform::fit_scaled(bounds, view_size, 0.9);
        assert!((transform.scale() - 0.15 * 0.9).abs() < 1e-12);

        let fitted = transform.world_to_view_rect(bounds);
        assert!(fitted.x0 > 0.0 && fitted.x1 < view_size.width);
        assert!(fitted.y0 > 0.0 && fitted.y1 < view_size.height);
    }

    #[test]
    fn visible_world_rect_inverts_the_view_rect() {
        let transform = ViewTransform::new(Vec2::new(0.0, 0.0), 1.0);
        let visible = transform.visible_world_rect(Size::new(800.0, 600.0));
        assert_eq!(visible, Rect::new(0.0, 0.0, 800.0, 600.0));

        let transform = ViewTransform::new(Vec2::new(100.0, 100.0), 2.0);
        let visible = transform.visible_world_rect(Size::new(800.0, 600.0));
        assert!((visible.x0 - -50.0).abs() < 1e-9);
        assert!((visible.x1 - 350.0).abs() < 1e-9);
    }

    #[test]
    fn grid_spacing_follows_zoom() {
        let far = ViewTransform::new(Vec2::ZERO, 0.1);
        let near = ViewTransform::new(Vec2::ZERO, 10.0);
        let base = 0.01;
        let s_far = far.grid_spacing(base);
        let s_near = near.grid_spacing(base);
        assert!(s_far >= s_near, "zoomed-out spacing must not shrink");
        assert!(s_near >= base);
    }
}
