// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Viewport: pan/zoom view state for the canvas scene.
//!
//! Two layers live here:
//!
//! - [`ViewTransform`]: a pure offset + uniform scale mapping between
//!   world space (where node geometry is authored) and view space
//!   (device pixels), with fit-to-bounds construction. Renderers hold
//!   one of these per surface: the main scene and the minimap each
//!   derive their own, and they only meet when the minimap projects the
//!   main view's visible world rectangle.
//! - [`Viewport`]: the interactive controller owning the main view's
//!   transform. It turns pointer drags, wheel/button zoom steps, and
//!   slider positions into new transform state, clamping scale into
//!   [`ZoomLimits`] at every mutation point so downstream consumers
//!   never re-validate.
//!
//! Zoom is anchor-agnostic: a zoom step scales about the canvas origin
//! transform, not the cursor position, so pans and zooms compose
//! independently.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use glade_viewport::Viewport;
//!
//! let mut viewport = Viewport::new();
//! let view_size = Size::new(800.0, 600.0);
//! viewport.fit_to_content(Some(Rect::new(0.0, 0.0, 400.0, 300.0)), view_size);
//!
//! // A point visible on screen maps back to the same world point.
//! let world = viewport.transform().view_to_world_point(Point::new(400.0, 300.0));
//! let view = viewport.transform().world_to_view_point(world);
//! assert!((view.x - 400.0).abs() < 1e-9);
//! ```

mod controller;
mod drag;
mod transform;

pub use controller::{Viewport, ViewportConfig, ZoomDirection, ZoomLimits};
pub use drag::DragState;
pub use transform::ViewTransform;
