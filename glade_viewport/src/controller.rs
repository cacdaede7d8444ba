// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::drag::DragState;
use crate::transform::ViewTransform;

/// Inclusive scale range the controller clamps into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 20.0,
        }
    }
}

impl ZoomLimits {
    fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// Zoom step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase scale (magnify).
    In,
    /// Decrease scale.
    Out,
}

/// Tunable viewport behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Scale range enforced at every mutation point.
    pub limits: ZoomLimits,
    /// Per-step factor for wheel zoom.
    pub wheel_zoom_step: f64,
    /// Per-step factor for zoom buttons.
    pub button_zoom_step: f64,
    /// Base of the logarithmic slider mapping (> 1).
    pub slider_base: f64,
    /// World-space padding added around content when fitting.
    pub fit_padding: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            wheel_zoom_step: 1.03,
            button_zoom_step: 1.2,
            slider_base: 1.1,
            fit_padding: 50.0,
        }
    }
}

/// The interactive viewport controller.
///
/// Owns the main view's [`ViewTransform`] and is the only mutator of it.
/// Renderers receive the transform as read-only input for a redraw pass.
/// Scale is clamped into the configured limits at every mutation point,
/// so no consumer needs to re-validate; the offset is unconstrained.
///
/// Zoom steps are anchor-agnostic by design: they scale about the canvas
/// origin transform rather than the pointer position, so panning and
/// zooming stay independent.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    config: ViewportConfig,
    transform: ViewTransform,
    drag: DragState,
}

impl Viewport {
    /// Creates a controller with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn with_config(config: ViewportConfig) -> Self {
        Self {
            config,
            transform: ViewTransform::IDENTITY,
            drag: DragState::default(),
        }
    }

    /// Returns the controller's configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the current view transform.
    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// Returns the current scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Begins a pointer drag at a view-space position.
    pub fn begin_drag(&mut self, pos: Point) {
        self.drag.start(pos);
    }

    /// Continues a drag, panning by the delta since the last sample.
    ///
    /// Ignored while idle.
    pub fn drag_to(&mut self, pos: Point) {
        if let Some(delta) = self.drag.update(pos) {
            self.pan_by(delta);
        }
    }

    /// Ends the current drag, if any.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Returns `true` while a pointer drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pans by a view-space delta unconditionally.
    ///
    /// This is also the path for plain and shift-modified wheel scroll.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.transform = ViewTransform::new(self.transform.offset() + delta, self.scale());
    }

    /// Applies one wheel zoom step in the given direction.
    pub fn zoom_wheel(&mut self, direction: ZoomDirection) {
        self.zoom_by_step(self.config.wheel_zoom_step, direction);
    }

    /// Applies one button zoom step in the given direction.
    pub fn zoom_button(&mut self, direction: ZoomDirection) {
        self.zoom_by_step(self.config.button_zoom_step, direction);
    }

    /// Sets the scale directly, clamped into the limits.
    ///
    /// The pan offset is left untouched.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = self.config.limits.clamp(scale);
        self.transform = ViewTransform::new(self.transform.offset(), clamped);
    }

    /// Returns the slider position for the current scale.
    ///
    /// The mapping is logarithmic (`slider = ln(scale) / ln(base)`) so
    /// linear slider motion feels like multiplicative zoom.
    #[must_use]
    pub fn slider_value(&self) -> f64 {
        self.scale().ln() / self.config.slider_base.ln()
    }

    /// Sets the scale from a slider position (`scale = base^slider`).
    pub fn set_slider_value(&mut self, value: f64) {
        self.set_scale(self.config.slider_base.powf(value));
    }

    /// Fits the content bounds into the view and centers them.
    ///
    /// Used for both the initial view and explicit reset-view. With no
    /// bounds (empty document), the view centers the world origin at
    /// scale 1. The fitted scale is clamped into the limits.
    pub fn fit_to_content(&mut self, bounds: Option<Rect>, view_size: Size) {
        let fitted = match bounds {
            Some(bounds) => ViewTransform::fit(bounds, view_size, self.config.fit_padding),
            None => ViewTransform::new(view_size.to_vec2() / 2.0, 1.0),
        };
        let clamped = self.config.limits.clamp(fitted.scale());
        self.transform = if clamped == fitted.scale() {
            fitted
        } else if let Some(bounds) = bounds {
            ViewTransform::centered_on(bounds.center(), view_size, clamped)
        } else {
            ViewTransform::new(view_size.to_vec2() / 2.0, clamped)
        };
    }

    fn zoom_by_step(&mut self, step: f64, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => step,
            ZoomDirection::Out => 1.0 / step,
        };
        self.set_scale(self.scale() * factor);
    }
}
