// Copyright 2025 the Drafter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: turn successive pointer positions into pan deltas.
//!
//! 1) Call [`DragState::start`] when the pan button goes down.
//! 2) On each frame while it is held, [`DragState::update`] returns the
//!    movement since the previous frame.
//! 3) [`DragState::end`] when the button is released.
//!
//! ```
//! use drafter_math::Vector2;
//! use drafter_view::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Vector2::new(10.0, 20.0));
//! assert_eq!(drag.update(Vector2::new(15.0, 25.0)), Some(Vector2::new(5.0, 5.0)));
//! assert_eq!(drag.total_offset(Vector2::new(16.0, 25.0)), Some(Vector2::new(6.0, 5.0)));
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use drafter_math::Vector2;

/// Tracks one pointer drag in device space.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Vector2>,
    /// Last position seen during the drag.
    pub last_pos: Option<Vector2>,
}

impl DragState {
    /// Starts tracking a new drag at `pos`.
    pub fn start(&mut self, pos: Vector2) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a new position and returns the movement since the last one.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Vector2) -> Option<Vector2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset of `current_pos` from the drag start.
    pub fn total_offset(&self, current_pos: Vector2) -> Option<Vector2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
