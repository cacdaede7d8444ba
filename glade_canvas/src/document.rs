// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document container, id lookup, bounds, and JSON Canvas parsing.

use std::collections::HashMap;
use std::fmt;

use kurbo::Rect;
use serde::Deserialize;

use crate::edge::{AnchorSide, Edge};
use crate::node::{Node, NodeKind};

/// A loaded canvas document: nodes and edges in document order.
///
/// The sequences are immutable for the session once built. Node order is
/// z-order for rendering: later nodes draw over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasDocument {
    /// All nodes, in document order.
    pub nodes: Vec<Node>,
    /// All edges, in document order.
    pub edges: Vec<Edge>,
}

impl CanvasDocument {
    /// Parses a document from JSON Canvas text.
    ///
    /// Accepts the `.canvas` interchange shape: a `nodes` array of typed
    /// records (`group` / `text` / `file` / `link`) with world-space
    /// rectangles, and an `edges` array of id-referenced connectors.
    /// Unknown anchor-side tokens degrade to [`AnchorSide::Center`];
    /// unknown node types are a parse error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] when the text is not valid JSON or
    /// does not match the JSON Canvas shape, and
    /// [`ParseError::InvalidRect`] when a node rectangle has a
    /// non-finite coordinate or a negative size.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let wire: WireDocument = serde_json::from_str(text).map_err(ParseError::Json)?;

        let mut nodes = Vec::with_capacity(wire.nodes.len());
        for node in wire.nodes {
            let finite = [node.x, node.y, node.width, node.height]
                .iter()
                .all(|v| v.is_finite());
            if !finite || node.width < 0.0 || node.height < 0.0 {
                return Err(ParseError::InvalidRect { node: node.id });
            }
            nodes.push(Node {
                rect: Rect::new(node.x, node.y, node.x + node.width, node.y + node.height),
                id: node.id,
                color: node.color,
                kind: match node.kind {
                    WireNodeKind::Group { label } => NodeKind::Group { label },
                    WireNodeKind::Text { text } => NodeKind::Text { text },
                    WireNodeKind::File { file } => NodeKind::File { file },
                    WireNodeKind::Link { url } => NodeKind::Link { url },
                },
            });
        }

        let edges = wire
            .edges
            .into_iter()
            .map(|edge| Edge {
                id: edge.id,
                from_node: edge.from_node,
                to_node: edge.to_node,
                from_side: AnchorSide::from_token(edge.from_side.as_deref()),
                to_side: AnchorSide::from_token(edge.to_side.as_deref()),
                label: edge.label,
            })
            .collect();

        Ok(Self { nodes, edges })
    }
}

/// Id → node index lookup, built once per document.
///
/// When the document contains duplicate ids, the later node wins; the
/// earlier one keeps rendering but can no longer be targeted by edges.
#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    by_id: HashMap<String, usize>,
}

impl NodeTable {
    /// Builds the lookup over a node slice.
    #[must_use]
    pub fn new(nodes: &[Node]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            by_id.insert(node.id.clone(), index);
        }
        Self { by_id }
    }

    /// Resolves an id to its node index, or `None` for unknown ids.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Resolves both endpoints of an edge, or `None` if either is missing.
    #[must_use]
    pub fn resolve_edge(&self, edge: &Edge) -> Option<(usize, usize)> {
        Some((self.resolve(&edge.from_node)?, self.resolve(&edge.to_node)?))
    }
}

/// Computes the world-space bounding box over all node rectangles.
///
/// Returns `None` iff the slice is empty. The result is tight: every
/// side of the box touches at least one node rectangle.
#[must_use]
pub fn content_bounds(nodes: &[Node]) -> Option<Rect> {
    let mut iter = nodes.iter();
    let first = iter.next()?.rect;
    Some(iter.fold(first, |bounds, node| bounds.union(node.rect)))
}

/// Error produced by [`CanvasDocument::from_json`].
#[derive(Debug)]
pub enum ParseError {
    /// The text was not valid JSON or did not match the JSON Canvas shape.
    Json(serde_json::Error),
    /// A node rectangle had a non-finite coordinate or a negative size.
    InvalidRect {
        /// Id of the offending node.
        node: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed canvas document: {err}"),
            Self::InvalidRect { node } => {
                write!(f, "node {node:?} has a non-finite or negative rectangle")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidRect { .. } => None,
        }
    }
}

#[derive(Deserialize)]
struct WireDocument {
    #[serde(default)]
    nodes: Vec<WireNode>,
    #[serde(default)]
    edges: Vec<WireEdge>,
}

#[derive(Deserialize)]
struct WireNode {
    id: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    color: Option<String>,
    #[serde(flatten)]
    kind: WireNodeKind,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WireNodeKind {
    Group {
        #[serde(default)]
        label: Option<String>,
    },
    Text {
        text: String,
    },
    File {
        file: String,
    },
    Link {
        url: String,
    },
}

#[derive(Deserialize)]
struct WireEdge {
    id: String,
    #[serde(rename = "fromNode")]
    from_node: String,
    #[serde(rename = "toNode")]
    to_node: String,
    #[serde(rename = "fromSide", default)]
    from_side: Option<String>,
    #[serde(rename = "toSide", default)]
    to_side: Option<String>,
    #[serde(default)]
    label: Option<String>,
}
