// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Imaging: the drawing surface the renderers target.
//!
//! The scene and minimap renderers are written against [`Surface`], an
//! immediate-mode trait covering exactly the primitive set a canvas
//! scene needs: filled and stroked rectangles, filled rounded
//! rectangles, stroked cubic Béziers, filled triangles, text
//! measurement and drawing, and image blits against opaque [`ImageRef`]
//! handles. Any backend exposing this set suffices: an HTML canvas
//! context, a GPU vector renderer, or the in-memory recorder.
//!
//! A surface carries one piece of state: the current transform. The
//! scene renderer sets the composed world → view affine once per pass
//! and emits world-space geometry under it, then resets to identity for
//! screen-space decorations.
//!
//! The [`recording`] module provides [`RecordingSurface`], which logs
//! every call as a [`SurfaceOp`] for tests and debugging instead of
//! producing pixels.
//!
//! [`RecordingSurface`]: recording::RecordingSurface
//! [`SurfaceOp`]: recording::SurfaceOp

pub mod recording;

use kurbo::{Affine, CubicBez, Point, Rect, RoundedRect};
use peniko::Color;

/// Opaque handle to a decoded image, plus its pixel dimensions.
///
/// The content-loading collaborator produces these; the core never
/// inspects pixels, it only needs the dimensions for aspect-fit layout
/// and the id for the backend to find the texture again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef {
    /// Backend-assigned identifier, stable for the session.
    pub id: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageRef {
    /// Width over height; `None` for images with a zero dimension.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}

/// An immediate-mode 2D drawing surface.
///
/// Geometry arguments are interpreted under the current transform
/// (identity until [`Surface::set_transform`] is called). Colors carry
/// their own alpha; there is no separate global-alpha state.
pub trait Surface {
    /// Sets the transform applied to subsequent geometry.
    fn set_transform(&mut self, transform: Affine);

    /// Clears the whole surface to a color, ignoring the transform.
    fn clear(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes an axis-aligned rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fills a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Strokes a straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64);

    /// Strokes a cubic Bézier curve.
    fn stroke_cubic(&mut self, curve: CubicBez, color: Color, width: f64);

    /// Fills a triangle.
    fn fill_triangle(&mut self, corners: [Point; 3], color: Color);

    /// Measures the advance width of a single line of text.
    fn measure_text(&self, text: &str, size: f64) -> f64;

    /// Draws a single line of text with its left baseline at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size: f64, color: Color);

    /// Draws an image into a destination rectangle.
    fn draw_image(&mut self, image: ImageRef, dst: Rect);
}
