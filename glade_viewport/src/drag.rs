// Copyright 2025 the Glade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pointer drag bookkeeping: turns a stream of positions into deltas.
///
/// The viewport is either idle or dragging; this type is that state.
/// [`DragState::update`] returns the movement since the previous sample,
/// which the controller applies directly to its pan offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at the given position.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records a new position, returning the delta since the last sample.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Ends the drag. Safe to call when idle.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;

    #[test]
    fn updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        assert!(drag.is_dragging());

        assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.update(Point::new(12.0, 30.0)), Some(Vec2::new(-3.0, 5.0)));
    }

    #[test]
    fn update_while_idle_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn end_resets_and_is_safe_when_idle() {
        let mut drag = DragState::default();
        drag.end();
        drag.start(Point::new(0.0, 0.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(5.0, 5.0)), None);
    }
}
