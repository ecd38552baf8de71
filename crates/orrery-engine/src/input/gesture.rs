//! Click-versus-drag classification for a single pointer.

use glam::Vec2;

/// Default movement (CSS pixels) before a press turns into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 5.0;

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerRelease {
    /// Press and release without a drag, at the release position.
    Click(Vec2),
    /// A drag gesture finished.
    DragEnd,
    /// Release without a matching press.
    Ignored,
}

/// Tracks one pointer from press to release.
#[derive(Debug, Clone)]
pub struct PointerGesture {
    pressed: bool,
    dragging: bool,
    start: Vec2,
    last: Vec2,
    drag_threshold: f32,
}

impl PointerGesture {
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            pressed: false,
            dragging: false,
            start: Vec2::ZERO,
            last: Vec2::ZERO,
            drag_threshold,
        }
    }

    pub fn press(&mut self, pos: Vec2) {
        self.pressed = true;
        self.dragging = false;
        self.start = pos;
        self.last = pos;
    }

    /// Feed a pointer move. Returns the delta since the last reported
    /// position once the press has become a drag.
    pub fn motion(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        if !self.dragging && (pos - self.start).length() > self.drag_threshold {
            self.dragging = true;
        }
        if !self.dragging {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn release(&mut self, pos: Vec2) -> PointerRelease {
        if !self.pressed {
            return PointerRelease::Ignored;
        }
        let result = if self.dragging || (pos - self.start).length() > self.drag_threshold {
            PointerRelease::DragEnd
        } else {
            PointerRelease::Click(pos)
        };
        self.pressed = false;
        self.dragging = false;
        result
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

impl Default for PointerGesture {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}
