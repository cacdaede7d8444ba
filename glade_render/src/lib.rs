// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Render: scene and minimap passes over a canvas document.
//!
//! This crate walks an immutable [`CanvasDocument`] once per redraw and
//! turns it into [`Surface`] calls:
//!
//! - [`SceneRenderer`]: the main pass. Background and grid dots, then,
//!   under the composed world → view transform, every edge (via
//!   `glade_route`) followed by every node in document order, with an
//!   exhaustive dispatch over node kinds. Edges draw under nodes, and
//!   later nodes draw over earlier ones: document order is z-order.
//! - [`MinimapRenderer`]: a reduced-detail pass under its own
//!   fit-to-content transform, overlaid with the main viewport's
//!   visible world region inverse-mapped into minimap space.
//! - [`RenderCache`]: the side table of transient per-node state
//!   (fetched text, decoded images, scroll offsets), keyed by node index
//!   so the document model stays immutable. Content arrives through the
//!   [`ContentSource`] / [`ContentEvent`] boundary as an explicit
//!   `Unrequested → Loading → Ready | Failed` state machine, and every
//!   completion schedules a redraw through the idempotent
//!   [`RedrawFlag`].
//! - [`Theme`] and [`ColorScheme`]: visual constants and the
//!   color-category lookup boundary.
//!
//! Everything degrades rather than fails: an edge with a missing
//! endpoint is skipped, failed content renders a placeholder, and
//! degenerate geometry short-circuits. There is no user-facing error
//! surface in a redraw pass.
//!
//! [`CanvasDocument`]: glade_canvas::CanvasDocument
//! [`Surface`]: glade_imaging::Surface

mod cache;
mod minimap;
mod redraw;
mod scene;
mod theme;

pub use cache::{
    ContentEvent, ContentSource, LoadState, NodeContent, RenderCache, SCROLL_INSET,
};
pub use minimap::{MINIMAP_MARGIN, MinimapRenderer};
pub use redraw::RedrawFlag;
pub use scene::{OverlayPlacement, SceneRenderer, overlay_placements, scrollable_node_at};
pub use theme::{CanvasPalette, ColorScheme, ColorTriple, Theme};
