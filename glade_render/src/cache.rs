// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node transient render state and the content-loading boundary.
//!
//! Documents are immutable after load, but rendering accumulates
//! transient facts about file nodes: fetched text, decoded images, a
//! scroll position, a measured content height. That state lives here, in
//! a side table keyed by node index, so the document model stays
//! untouched and the cache's lifecycle is explicit.

use std::collections::HashMap;

use glade_imaging::ImageRef;
use log::{debug, warn};

use crate::redraw::RedrawFlag;

/// Progress of one asynchronous content fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    /// No fetch has been requested yet.
    Unrequested,
    /// A fetch is in flight.
    Loading,
    /// The fetch completed with a payload.
    Ready(T),
    /// The fetch failed; a placeholder is rendered instead.
    Failed,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Unrequested
    }
}

/// Transient render state for one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeContent {
    /// Fetched text content, for markdown and plain-text files.
    pub text: LoadState<String>,
    /// Decoded image handle, for image files.
    pub image: LoadState<ImageRef>,
    /// Current vertical scroll offset into the content, ≥ 0.
    pub scroll_offset: f64,
    /// Laid-out content height, set by the renderer once known.
    pub content_height: Option<f64>,
}

/// Vertical chrome inside a file node (header plus padding); scrolling
/// operates on the node height minus this inset.
pub const SCROLL_INSET: f64 = 40.0;

/// Fire-and-forget content fetch requests.
///
/// The renderer calls these the first time it needs a node's payload;
/// the embedder resolves them however it likes (filesystem, network)
/// and reports back by feeding [`ContentEvent`]s to
/// [`RenderCache::apply`]. Nothing here blocks, and there is no
/// cancellation: a completion for a request nobody is waiting on is
/// simply dropped.
pub trait ContentSource {
    /// Requests the text content of `path` for a node.
    fn request_text(&mut self, node: usize, path: &str);

    /// Requests a decoded image of `path` for a node.
    fn request_image(&mut self, node: usize, path: &str);
}

/// Completion of a content fetch, delivered by the embedder's event loop.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentEvent {
    /// Text content arrived for a node.
    TextReady {
        /// Node index the fetch belonged to.
        node: usize,
        /// The fetched text.
        text: String,
    },
    /// A text fetch failed.
    TextFailed {
        /// Node index the fetch belonged to.
        node: usize,
    },
    /// A decoded image arrived for a node.
    ImageReady {
        /// Node index the fetch belonged to.
        node: usize,
        /// Handle to the decoded image.
        image: ImageRef,
    },
    /// An image fetch failed.
    ImageFailed {
        /// Node index the fetch belonged to.
        node: usize,
    },
}

impl ContentEvent {
    fn node(&self) -> usize {
        match self {
            Self::TextReady { node, .. }
            | Self::TextFailed { node }
            | Self::ImageReady { node, .. }
            | Self::ImageFailed { node } => *node,
        }
    }
}

/// Side table of transient render state, keyed by node index.
#[derive(Clone, Debug, Default)]
pub struct RenderCache {
    entries: HashMap<usize, NodeContent>,
}

impl RenderCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a node's entry, creating it on first use.
    pub fn entry(&mut self, node: usize) -> &mut NodeContent {
        self.entries.entry(node).or_default()
    }

    /// Returns a node's entry if one exists.
    #[must_use]
    pub fn get(&self, node: usize) -> Option<&NodeContent> {
        self.entries.get(&node)
    }

    /// Applies a load completion and schedules a redraw.
    ///
    /// Completions for nodes without an entry (nothing ever requested)
    /// are dropped. Failures degrade to the placeholder rendering; they
    /// never propagate.
    pub fn apply(&mut self, event: ContentEvent, redraw: &mut RedrawFlag) {
        let Some(entry) = self.entries.get_mut(&event.node()) else {
            debug!("dropping content event for untracked node {}", event.node());
            return;
        };
        match event {
            ContentEvent::TextReady { text, .. } => entry.text = LoadState::Ready(text),
            ContentEvent::TextFailed { node } => {
                warn!("text load failed for node {node}");
                entry.text = LoadState::Failed;
            }
            ContentEvent::ImageReady { image, .. } => entry.image = LoadState::Ready(image),
            ContentEvent::ImageFailed { node } => {
                warn!("image load failed for node {node}");
                entry.image = LoadState::Failed;
            }
        }
        redraw.request();
    }

    /// Records the laid-out content height for a node.
    pub fn set_content_height(&mut self, node: usize, height: f64) {
        self.entry(node).content_height = Some(height);
    }

    /// Applies a scroll delta to a node's content, clamped on every call.
    ///
    /// The usable height is the node height minus [`SCROLL_INSET`]; the
    /// offset stays inside `[0, max(0, content_height - usable)]`, so no
    /// sequence of deltas can over- or under-scroll.
    pub fn scroll_by(&mut self, node: usize, node_height: f64, delta: f64) {
        let entry = self.entry(node);
        let usable = node_height - SCROLL_INSET;
        let max = (entry.content_height.unwrap_or(0.0) - usable).max(0.0);
        entry.scroll_offset = (entry.scroll_offset + delta).clamp(0.0, max);
    }
}

#[cfg(test)]
mod tests {
    use glade_imaging::ImageRef;

    use super::{ContentEvent, LoadState, RenderCache};
    use crate::redraw::RedrawFlag;

    #[test]
    fn scroll_stays_clamped_through_any_delta_sequence() {
        let mut cache = RenderCache::new();
        cache.set_content_height(0, 500.0);

        // Node height 300 → usable 260 → max offset 240.
        let mut total = 0.0;
        for _ in 0..100 {
            cache.scroll_by(0, 300.0, 100.0);
            total += 100.0;
            let offset = cache.get(0).unwrap().scroll_offset;
            assert!((0.0..=240.0).contains(&offset), "offset {offset} after +{total}");
        }
        assert_eq!(cache.get(0).unwrap().scroll_offset, 240.0);

        for _ in 0..100 {
            cache.scroll_by(0, 300.0, -100.0);
            let offset = cache.get(0).unwrap().scroll_offset;
            assert!((0.0..=240.0).contains(&offset));
        }
        assert_eq!(cache.get(0).unwrap().scroll_offset, 0.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut cache = RenderCache::new();
        cache.set_content_height(3, 100.0);
        cache.scroll_by(3, 300.0, 50.0);
        assert_eq!(cache.get(3).unwrap().scroll_offset, 0.0);
    }

    #[test]
    fn scroll_without_measured_content_is_pinned_to_zero() {
        let mut cache = RenderCache::new();
        cache.scroll_by(7, 300.0, 25.0);
        assert_eq!(cache.get(7).unwrap().scroll_offset, 0.0);
    }

    #[test]
    fn completions_update_tracked_entries_and_request_redraws() {
        let mut cache = RenderCache::new();
        let mut redraw = RedrawFlag::default();

        cache.entry(2).text = LoadState::Loading;
        cache.apply(
            ContentEvent::TextReady {
                node: 2,
                text: "body".to_owned(),
            },
            &mut redraw,
        );
        assert_eq!(
            cache.get(2).unwrap().text,
            LoadState::Ready("body".to_owned())
        );
        assert!(redraw.take());

        cache.entry(2).image = LoadState::Loading;
        cache.apply(ContentEvent::ImageFailed { node: 2 }, &mut redraw);
        assert_eq!(cache.get(2).unwrap().image, LoadState::<ImageRef>::Failed);
        assert!(redraw.take());
    }

    #[test]
    fn completions_for_untracked_nodes_are_dropped() {
        let mut cache = RenderCache::new();
        let mut redraw = RedrawFlag::default();
        cache.apply(ContentEvent::TextFailed { node: 42 }, &mut redraw);
        assert!(cache.get(42).is_none());
        assert!(!redraw.is_requested());
    }
}
