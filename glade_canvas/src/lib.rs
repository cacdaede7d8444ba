// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glade Canvas: the spatial canvas document model.
//!
//! A canvas document is a flat set of positioned [`Node`]s (text blocks,
//! file previews, embedded links, grouping boxes) joined by directional
//! [`Edge`]s. This crate owns the loaded, immutable form of that data:
//!
//! - [`CanvasDocument`]: the node and edge sequences, in document order.
//!   Document order is meaningful: renderers treat it as z-order.
//! - [`NodeTable`]: an id → index lookup built once per document, used for
//!   O(1) edge-endpoint resolution. Edges hold node *ids*, never indices
//!   or pointers; an edge whose endpoint is missing simply fails to
//!   resolve and is skipped by consumers.
//! - [`CanvasDocument::from_json`]: a parser for the JSON Canvas
//!   interchange format (`.canvas` files).
//! - [`content_bounds`]: the world-space bounding box over all node
//!   rectangles, recomputed on demand.
//!
//! Node geometry is authored in world space and never changes after load.
//! Transient render state (fetched text, decoded images, scroll offsets)
//! deliberately does **not** live here; the rendering layer keeps it in a
//! side table keyed by node index.
//!
//! ```rust
//! use glade_canvas::{CanvasDocument, NodeTable};
//!
//! let doc = CanvasDocument::from_json(
//!     r#"{
//!         "nodes": [
//!             {"id": "a", "type": "text", "text": "hello",
//!              "x": 0, "y": 0, "width": 200, "height": 100}
//!         ],
//!         "edges": []
//!     }"#,
//! )?;
//! let table = NodeTable::new(&doc.nodes);
//! assert_eq!(table.resolve("a"), Some(0));
//! # Ok::<(), glade_canvas::ParseError>(())
//! ```

mod document;
mod edge;
mod node;

pub use document::{CanvasDocument, NodeTable, ParseError, content_bounds};
pub use edge::{AnchorSide, Edge};
pub use node::{FileCategory, Node, NodeKind, file_badge};
