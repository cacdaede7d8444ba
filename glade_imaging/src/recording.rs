// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A surface that records operations instead of producing pixels.
//!
//! Intended for tests that assert on what a renderer emitted and in
//! which order. Text measurement uses a fixed-advance model so layout
//! decisions are deterministic without a font stack.

use kurbo::{Affine, CubicBez, Point, Rect, RoundedRect};
use peniko::Color;

use crate::{ImageRef, Surface};

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// `set_transform` call.
    SetTransform(Affine),
    /// `clear` call.
    Clear(Color),
    /// `fill_rect` call.
    FillRect(Rect, Color),
    /// `stroke_rect` call.
    StrokeRect(Rect, Color, f64),
    /// `fill_rounded_rect` call.
    FillRoundedRect(RoundedRect, Color),
    /// `stroke_line` call.
    StrokeLine(Point, Point, Color, f64),
    /// `stroke_cubic` call.
    StrokeCubic(CubicBez, Color, f64),
    /// `fill_triangle` call.
    FillTriangle([Point; 3], Color),
    /// `fill_text` call.
    FillText(String, Point, f64, Color),
    /// `draw_image` call.
    DrawImage(ImageRef, Rect),
}

/// Advance width per character, as a fraction of the text size.
const TEXT_ADVANCE: f64 = 0.6;

/// In-memory [`Surface`] implementation that logs every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded operations in call order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Discards all recorded operations.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeRect(rect, color, width));
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.ops.push(SurfaceOp::FillRoundedRect(rect, color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeLine(from, to, color, width));
    }

    fn stroke_cubic(&mut self, curve: CubicBez, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeCubic(curve, color, width));
    }

    fn fill_triangle(&mut self, corners: [Point; 3], color: Color) {
        self.ops.push(SurfaceOp::FillTriangle(corners, color));
    }

    fn measure_text(&self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * TEXT_ADVANCE
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f64, color: Color) {
        self.ops
            .push(SurfaceOp::FillText(text.to_owned(), origin, size, color));
    }

    fn draw_image(&mut self, image: ImageRef, dst: Rect) {
        self.ops.push(SurfaceOp::DrawImage(image, dst));
    }
}
