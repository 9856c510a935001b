#![forbid(unsafe_code)]

//! Ephemeral drag-session state.
//!
//! At most one session exists at a time. The anchor is fixed at press time
//! in container-relative coordinates (pointer minus container origin plus
//! scroll offset), so the rectangle stays stable while the container
//! scrolls under an active drag.

use marquee_core::geometry::{Point, Rect};

/// The active state between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Container-relative anchor recorded at press.
    pub anchor: Point,
    /// Container-relative position of the last pointer move.
    pub current: Point,
}

impl DragSession {
    /// Start a session with a zero-extent rectangle at the anchor.
    #[must_use]
    pub const fn new(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    /// The normalized selection rectangle for the session.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}

/// Ephemeral touch-sequence state used for tap/drag disambiguation.
#[derive(Debug, Clone, Copy)]
pub struct TouchSession {
    /// First-contact position in client coordinates.
    pub origin: Point,
    /// First-contact timestamp.
    pub started_at: web_time::Instant,
    /// Whether this sequence was promoted into a drag session.
    pub dragging: bool,
}

impl TouchSession {
    /// Record first contact.
    #[must_use]
    pub const fn new(origin: Point, started_at: web_time::Instant) -> Self {
        Self {
            origin,
            started_at,
            dragging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_zero_extent() {
        let session = DragSession::new(Point::new(4.0, 9.0));
        assert_eq!(session.rect(), Rect::new(4.0, 9.0, 0.0, 0.0));
    }

    #[test]
    fn rect_normalizes_upward_drag() {
        let mut session = DragSession::new(Point::new(50.0, 60.0));
        session.current = Point::new(10.0, 20.0);
        assert_eq!(session.rect(), Rect::new(10.0, 20.0, 40.0, 40.0));
    }
}
