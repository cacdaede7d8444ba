// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Idempotent redraw request flag.
///
/// Anything that changes observable state (a pointer move, a zoom step,
/// a content-load completion) requests a redraw; the embedder's frame
/// loop takes the flag once per frame and redraws when it was set.
/// Requesting any number of times between frames coalesces into one
/// redraw, and each redraw observes the latest state at the time it
/// runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedrawFlag {
    requested: bool,
}

impl RedrawFlag {
    /// Requests a redraw. Redundant requests coalesce.
    pub fn request(&mut self) {
        self.requested = true;
    }

    /// Returns whether a redraw is pending without consuming it.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consumes the pending request, if any.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.requested)
    }
}
