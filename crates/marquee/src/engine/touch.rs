#![forbid(unsafe_code)]

//! Touch adapter: translates touch sequences into the pointer-drag
//! machine's vocabulary.
//!
//! A sequence that moves past the distance threshold becomes a drag
//! (synthesized press at the origin point, then forwarded moves); a short
//! stationary sequence is a tap that toggles the candidate under the
//! release point. The adapter introduces no intersection logic of its
//! own.

use web_time::Instant;

use marquee_core::event::{Modifiers, PointerButton, TouchEvent, TouchPhase};
use marquee_core::geometry::Point;
use marquee_core::host::ElementHost;

use crate::callbacks::SelectEvent;
use crate::drag::TouchSession;
use crate::engine::{AdmitOrigin, SelectEngine};

impl<H: ElementHost> SelectEngine<H> {
    /// Handle a touch event. `now` is used to classify taps.
    pub fn handle_touch(&mut self, event: &TouchEvent, now: Instant) {
        if !self.enabled || !self.options.touch {
            return;
        }
        match event.phase {
            TouchPhase::Start => {
                self.touch = Some(TouchSession::new(event.position, now));
                self.emit(SelectEvent::TouchStart {
                    position: event.position,
                });
            }
            TouchPhase::Move => self.on_touch_move(event.position),
            TouchPhase::End => self.on_touch_end(event.position, now),
        }
    }

    fn on_touch_move(&mut self, position: Point) {
        let Some(mut session) = self.touch else {
            return;
        };
        let threshold = self.options.tap_max_distance;
        let (dx, dy) = position.axis_distance(session.origin);

        if !session.dragging && (dx > threshold || dy > threshold) && self.drag.is_none() {
            session.dragging = true;
            self.touch = Some(session);
            // Synthesize the press at the origin point, then fall through
            // to forward this move.
            self.on_pointer_down(session.origin, PointerButton::Primary, Modifiers::NONE);
        } else {
            self.touch = Some(session);
        }

        if session.dragging {
            self.on_pointer_move(position);
        }
    }

    fn on_touch_end(&mut self, position: Point, now: Instant) {
        if let Some(session) = self.touch.take() {
            if session.dragging {
                self.on_pointer_up();
            } else {
                let threshold = self.options.tap_max_distance;
                let (dx, dy) = position.axis_distance(session.origin);
                let elapsed = now.duration_since(session.started_at);
                if dx < threshold && dy < threshold && elapsed < self.options.tap_timeout {
                    // Tap: hit-test the full candidate list, not the
                    // visible-only subset.
                    let relative = self.to_relative(position);
                    if let Some((id, _)) = self.hit_test(relative) {
                        self.toggle(id, AdmitOrigin::Pointer);
                    }
                }
            }
        }
        self.emit(SelectEvent::TouchEnd { position });
    }
}
