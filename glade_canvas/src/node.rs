// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node model: kinds, geometry, and file classification.

use kurbo::Rect;

/// A positioned element of a canvas document.
///
/// Nodes are immutable input data: the rectangle is authored in world
/// space and never changes for the lifetime of the document. Anything a
/// renderer learns about a node later (fetched content, decoded images,
/// scroll position) belongs in the renderer's own side table, keyed by
/// the node's index in [`crate::CanvasDocument::nodes`].
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Unique key for this node. Edges reference nodes by this id.
    pub id: String,
    /// World-space rectangle occupied by the node.
    pub rect: Rect,
    /// Optional color-category token, resolved by the embedder's color
    /// scheme. `None` means the default triple.
    pub color: Option<String>,
    /// Kind tag plus kind-specific payload.
    pub kind: NodeKind,
}

/// The four node kinds and their payloads.
///
/// Renderers match on this exhaustively, so adding a kind is a
/// compile-time-checked change everywhere it matters.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// A grouping box drawn behind its members, with an optional label.
    Group {
        /// Label shown in a chip above the group's top-left corner.
        label: Option<String>,
    },
    /// A free-text block.
    Text {
        /// The text content, possibly multi-line.
        text: String,
    },
    /// A preview of a file referenced by path.
    File {
        /// Path of the referenced file, relative to the document root.
        file: String,
    },
    /// An embedded external link.
    Link {
        /// The link URL.
        url: String,
    },
}

/// Coarse classification of a file node's referenced path.
///
/// The category decides how the renderer treats the node: image files get
/// a decoded-image fetch and aspect-fit drawing, markdown files get a
/// text fetch with scrolling, and everything else is drawn as a badge
/// plus the raw path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileCategory {
    /// Raster or vector image (`png`, `jpg`, `jpeg`, `gif`, `svg`).
    Image,
    /// Markdown text (`md`).
    Markdown,
    /// Plain text (`txt`).
    Plain,
    /// Audio (`mp3`).
    Audio,
    /// Video (`mp4`).
    Video,
    /// PDF document.
    Pdf,
    /// Anything else; the badge falls back to the uppercased extension.
    Other,
}

impl FileCategory {
    /// Classifies a path by its (case-insensitive) extension.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match extension(path).to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "svg" => Self::Image,
            "md" => Self::Markdown,
            "txt" => Self::Plain,
            "mp3" => Self::Audio,
            "mp4" => Self::Video,
            "pdf" => Self::Pdf,
            _ => Self::Other,
        }
    }
}

/// Returns the short badge text drawn in a file node's corner.
///
/// Known categories map to fixed badges; unknown extensions are shown
/// uppercased, so `report.xlsx` gets `XLSX`.
#[must_use]
pub fn file_badge(path: &str) -> String {
    match FileCategory::from_path(path) {
        FileCategory::Image => "IMG".to_owned(),
        FileCategory::Markdown => "MD".to_owned(),
        FileCategory::Plain => "TXT".to_owned(),
        FileCategory::Audio => "\u{266a}".to_owned(),
        FileCategory::Video => "VID".to_owned(),
        FileCategory::Pdf => "PDF".to_owned(),
        FileCategory::Other => extension(path).to_ascii_uppercase(),
    }
}

/// The text after the final `.`, or the whole path when there is none.
fn extension(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
