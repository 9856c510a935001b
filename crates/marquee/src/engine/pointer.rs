#![forbid(unsafe_code)]

//! Pointer-drag state machine: Idle ⇄ Dragging.
//!
//! Only the primary button starts a session, and only from Idle.
//! Shift-click (with a valid keyboard cursor) and ctrl/meta-click on a
//! candidate short-circuit the machine entirely; when the modifier press
//! misses every candidate it falls through to a normal drag start.

use marquee_core::event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
use marquee_core::geometry::Point;
use marquee_core::host::ElementHost;

use crate::callbacks::SelectEvent;
use crate::drag::DragSession;
use crate::engine::{AdmitOrigin, SelectEngine};

impl<H: ElementHost> SelectEngine<H> {
    /// Handle a pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        if !self.enabled {
            return;
        }
        match event.kind {
            PointerEventKind::Down(button) => {
                self.on_pointer_down(event.position, button, event.modifiers);
            }
            PointerEventKind::Move => self.on_pointer_move(event.position),
            PointerEventKind::Up(_) => self.on_pointer_up(),
        }
    }

    pub(crate) fn on_pointer_down(
        &mut self,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) {
        if button != PointerButton::Primary {
            return;
        }
        // Press is only honored from Idle.
        if self.drag.is_some() {
            return;
        }
        let relative = self.to_relative(position);

        if modifiers.contains(Modifiers::SHIFT)
            && let Some(cursor) = self.cursor
            && let Some((_, index)) = self.hit_test(relative)
        {
            self.select_range_internal(cursor, index, AdmitOrigin::Pointer);
            return;
        }
        if modifiers.intersects(Modifiers::CTRL | Modifiers::SUPER)
            && let Some((id, _)) = self.hit_test(relative)
        {
            self.toggle(id, AdmitOrigin::Pointer);
            return;
        }

        if !self.options.multi_select {
            self.clear_selection();
        }

        let session = DragSession::new(relative);
        let rect = session.rect();
        self.drag = Some(session);
        self.host.show_indicator();
        self.host.move_indicator(rect);
        self.emit(SelectEvent::Start { position });
        // The zero-extent anchor rectangle still admits the candidate
        // under the press point (intersection is boundary-inclusive), so
        // a plain click selects what it lands on.
        self.evaluate(rect, AdmitOrigin::Pointer);
    }

    pub(crate) fn on_pointer_move(&mut self, position: Point) {
        let Some(mut session) = self.drag else {
            return;
        };
        session.current = self.to_relative(position);
        self.drag = Some(session);
        let rect = session.rect();
        self.host.move_indicator(rect);
        self.evaluate(rect, AdmitOrigin::Pointer);
    }

    pub(crate) fn on_pointer_up(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.host.hide_indicator();
        let selected = self.selection.ordered(&self.registry);
        self.emit(SelectEvent::End { selected });
    }
}
